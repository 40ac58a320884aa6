use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::BlogService;
use crate::models::blogs::entities::BlogStatus;
use crate::models::blogs::requests::{BlogListParams, BlogListQuery};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

/// 文章列表。匿名访问只返回已发布文章；
/// 作者查询自己的文章（author_id = 本人）时包含草稿，管理员不受限。
pub async fn list_posts(
    service: &BlogService,
    params: BlogListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let claims = JwtUtils::extract_optional_claims(request);

    let status = match &claims {
        Some(c) if c.role == "admin" => None,
        Some(c) if params.author_id.is_some() && c.sub.parse::<i64>().ok() == params.author_id => {
            None
        }
        _ => Some(BlogStatus::Published),
    };

    let query = BlogListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
        category_id: params.category_id,
        author_id: params.author_id,
        status,
    };

    let storage = service.get_storage(request);

    match storage.list_blog_posts_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list blog posts: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list blog posts: {e}"),
                )),
            )
        }
    }
}
