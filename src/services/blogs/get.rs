use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BlogService;
use crate::models::blogs::entities::BlogStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

/// 按 slug 读取文章。草稿只有作者本人和管理员可见。
pub async fn get_post(
    service: &BlogService,
    slug: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_blog_post_by_slug(&slug).await {
        Ok(Some(post)) => {
            if post.status == BlogStatus::Draft {
                // 公共路由：凭 access token 尽力识别访问者
                let claims = JwtUtils::extract_optional_claims(request);
                let allowed = claims.is_some_and(|c| {
                    c.role == "admin" || c.sub.parse::<i64>() == Ok(post.author_id)
                });
                if !allowed {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::BlogPostNotFound,
                        "Blog post not found",
                    )));
                }
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(post, "OK")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::BlogPostNotFound,
            "Blog post not found",
        ))),
        Err(e) => {
            error!("Failed to get blog post {}: {}", slug, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get blog post: {e}"),
                )),
            )
        }
    }
}
