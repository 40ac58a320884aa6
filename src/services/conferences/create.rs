use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ConferenceService;
use crate::models::conferences::requests::CreateConferenceRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_title;

pub async fn create_conference(
    service: &ConferenceService,
    conference_data: CreateConferenceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_title(&conference_data.title) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if conference_data.ends_at <= conference_data.starts_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Conference must end after it starts",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_conference(conference_data).await {
        Ok(conference) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(conference, "会议创建成功")))
        }
        Err(e) => {
            error!("Conference creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Conference creation failed: {e}"),
                )),
            )
        }
    }
}
