use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ConferenceService;
use crate::middlewares::RequireJWT;
use crate::models::audit::entities::NewAuditLog;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_conference(
    service: &ConferenceService,
    conference_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_conference(conference_id).await {
        Ok(true) => {
            if let Some(actor_id) = RequireJWT::extract_user_id(request) {
                let _ = storage
                    .append_audit_log(NewAuditLog::new(
                        actor_id,
                        "conference.delete",
                        "conference",
                        conference_id,
                    ))
                    .await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("会议删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ConferenceNotFound,
            "Conference not found",
        ))),
        Err(e) => {
            error!("Failed to delete conference {}: {}", conference_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete conference: {e}"),
                )),
            )
        }
    }
}
