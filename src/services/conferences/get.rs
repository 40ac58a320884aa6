use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ConferenceService;
use crate::models::conferences::responses::ConferenceDetailResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 会议详情，附当前报名人数
pub async fn get_conference(
    service: &ConferenceService,
    conference_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let conference = match storage.get_conference_by_id(conference_id).await {
        Ok(Some(conference)) => conference,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ConferenceNotFound,
                "Conference not found",
            )));
        }
        Err(e) => {
            error!("Failed to get conference {}: {}", conference_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get conference: {e}"),
                )),
            );
        }
    };

    match storage.count_conference_registrations(conference_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ConferenceDetailResponse {
                conference,
                registered_count: count as i64,
            },
            "OK",
        ))),
        Err(e) => {
            error!("Failed to count registrations: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to count registrations: {e}"),
                )),
            )
        }
    }
}
