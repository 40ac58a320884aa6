use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BlogService;
use crate::middlewares::RequireJWT;
use crate::models::blogs::requests::UpdateBlogPostRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_post(
    service: &BlogService,
    post_id: i64,
    update_data: UpdateBlogPostRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 作者本人或管理员
    match storage.get_blog_post_by_id(post_id).await {
        Ok(Some(post)) => {
            let role = RequireJWT::extract_user_role(request);
            if post.author_id != user_id && role != Some(UserRole::Admin) {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "You can only modify your own posts",
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

    match storage.update_blog_post(post_id, update_data).await {
        Ok(Some(post)) => Ok(HttpResponse::Ok().json(ApiResponse::success(post, "文章更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BlogPostNotFound,
            "Blog post not found",
        ))),
        Err(e) => {
            error!("Blog post update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Blog post update failed: {e}"),
                )),
            )
        }
    }
}
