use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CategoryService;
use crate::models::categories::requests::{CategoryListParams, CategoryListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_categories(
    service: &CategoryService,
    params: CategoryListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let query: CategoryListQuery = params.into();

    match storage.list_categories_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list categories: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list categories: {e}"),
                )),
            )
        }
    }
}
