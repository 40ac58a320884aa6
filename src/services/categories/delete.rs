use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CategoryService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_category(
    service: &CategoryService,
    category_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_category(category_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("分类删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CategoryNotFound,
            "Category not found",
        ))),
        Err(e) => {
            error!("Failed to delete category {}: {}", category_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete category: {e}"),
                )),
            )
        }
    }
}
