use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ScholarshipService;
use crate::models::scholarships::requests::{ScholarshipListParams, ScholarshipListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_scholarships(
    service: &ScholarshipService,
    params: ScholarshipListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ScholarshipListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
        status: params.status,
    };

    match storage.list_scholarships_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list scholarships: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list scholarships: {e}"),
                )),
            )
        }
    }
}
