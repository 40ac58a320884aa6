use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ScholarshipService;
use crate::middlewares::RequireJWT;
use crate::models::audit::entities::NewAuditLog;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_scholarship(
    service: &ScholarshipService,
    scholarship_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_scholarship(scholarship_id).await {
        Ok(true) => {
            if let Some(actor_id) = RequireJWT::extract_user_id(request) {
                let _ = storage
                    .append_audit_log(NewAuditLog::new(
                        actor_id,
                        "scholarship.delete",
                        "scholarship",
                        scholarship_id,
                    ))
                    .await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("奖学金删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScholarshipNotFound,
            "Scholarship not found",
        ))),
        Err(e) => {
            error!("Failed to delete scholarship {}: {}", scholarship_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete scholarship: {e}"),
                )),
            )
        }
    }
}
