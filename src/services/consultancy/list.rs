use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ConsultancyService;
use crate::models::consultancy::requests::{ConsultancyListParams, ConsultancyListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_requests(
    service: &ConsultancyService,
    params: ConsultancyListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ConsultancyListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        status: params.status,
        user_id: params.user_id,
    };

    match storage.list_consultancy_requests_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list consultancy requests: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list consultancy requests: {e}"),
                )),
            )
        }
    }
}
