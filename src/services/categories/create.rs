use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CategoryService;
use crate::models::categories::requests::CreateCategoryRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_title;

pub async fn create_category(
    service: &CategoryService,
    category_data: CreateCategoryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_title(&category_data.name) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    let storage = service.get_storage(request);

    match storage.create_category(category_data).await {
        Ok(category) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(category, "分类创建成功")))
        }
        Err(e) => {
            let msg = format!("Category creation failed: {e}");
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
