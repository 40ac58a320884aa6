use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BlogService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_post(
    service: &BlogService,
    post_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.get_blog_post_by_id(post_id).await {
        Ok(Some(post)) => {
            let role = RequireJWT::extract_user_role(request);
            if post.author_id != user_id && role != Some(UserRole::Admin) {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "You can only delete your own posts",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::BlogPostNotFound,
                "Blog post not found",
            )));
        }
        Err(e) => {
            error!("Failed to get blog post {}: {}", post_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get blog post: {e}"),
                )),
            );
        }
    }

    match storage.delete_blog_post(post_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("文章删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BlogPostNotFound,
            "Blog post not found",
        ))),
        Err(e) => {
            error!("Failed to delete blog post {}: {}", post_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete blog post: {e}"),
                )),
            )
        }
    }
}
