use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CategoryService;
use crate::models::categories::requests::UpdateCategoryRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_category(
    service: &CategoryService,
    category_id: i64,
    update_data: UpdateCategoryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_category(category_id, update_data).await {
        Ok(Some(category)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(category, "分类更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CategoryNotFound,
            "Category not found",
        ))),
        Err(e) => {
            let msg = format!("Category update failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::CategoryAlreadyExists,
                    "Category name already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
