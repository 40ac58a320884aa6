use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ConsultancyService;
use crate::models::consultancy::requests::UpdateConsultancyStatusRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_status(
    service: &ConsultancyService,
    request_id: i64,
    status_data: UpdateConsultancyStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .update_consultancy_status(request_id, status_data.status)
        .await
    {
        Ok(Some(consultancy)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(consultancy, "状态已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ConsultancyRequestNotFound,
            "Consultancy request not found",
        ))),
        Err(e) => {
            error!("Failed to update consultancy status: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update consultancy status: {e}"),
                )),
            )
        }
    }
}
