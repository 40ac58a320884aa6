use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ScholarshipService;
use crate::models::scholarships::requests::UpdateScholarshipRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_scholarship(
    service: &ScholarshipService,
    scholarship_id: i64,
    update_data: UpdateScholarshipRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(amount) = update_data.amount_cents
        && amount <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Amount must be positive",
        )));
    }

    let storage = service.get_storage(request);

    match storage
        .update_scholarship(scholarship_id, update_data)
        .await
    {
        Ok(Some(scholarship)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(scholarship, "奖学金更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScholarshipNotFound,
            "Scholarship not found",
        ))),
        Err(e) => {
            error!("Scholarship update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Scholarship update failed: {e}"),
                )),
            )
        }
    }
}
