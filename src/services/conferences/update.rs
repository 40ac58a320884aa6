use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ConferenceService;
use crate::models::conferences::requests::UpdateConferenceRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_conference(
    service: &ConferenceService,
    conference_id: i64,
    update_data: UpdateConferenceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_conference(conference_id, update_data).await {
        Ok(Some(conference)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(conference, "会议更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ConferenceNotFound,
            "Conference not found",
        ))),
        Err(e) => {
            error!("Conference update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Conference update failed: {e}"),
                )),
            )
        }
    }
}
