use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ScholarshipService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_scholarship(
    service: &ScholarshipService,
    scholarship_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_scholarship_by_id(scholarship_id).await {
        Ok(Some(scholarship)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(scholarship, "OK")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScholarshipNotFound,
            "Scholarship not found",
        ))),
        Err(e) => {
            error!("Failed to get scholarship {}: {}", scholarship_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get scholarship: {e}"),
                )),
            )
        }
    }
}
