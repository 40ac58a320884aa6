use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::blogs::requests::{
    BlogListParams, CreateBlogPostRequest, UpdateBlogPostRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::BlogService;
use crate::utils::{SafeIDI64, SafeSlug};

static BLOG_SERVICE: Lazy<BlogService> = Lazy::new(BlogService::new_lazy);

pub async fn list_posts(
    req: HttpRequest,
    query: web::Query<BlogListParams>,
) -> ActixResult<HttpResponse> {
    BLOG_SERVICE.list_posts(query.into_inner(), &req).await
}

pub async fn get_post(req: HttpRequest, slug: SafeSlug) -> ActixResult<HttpResponse> {
    BLOG_SERVICE.get_post(slug.0, &req).await
}

pub async fn create_post(
    req: HttpRequest,
    post_data: web::Json<CreateBlogPostRequest>,
) -> ActixResult<HttpResponse> {
    BLOG_SERVICE.create_post(post_data.into_inner(), &req).await
}

pub async fn update_post(
    req: HttpRequest,
    post_id: SafeIDI64,
    update_data: web::Json<UpdateBlogPostRequest>,
) -> ActixResult<HttpResponse> {
    BLOG_SERVICE
        .update_post(post_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_post(req: HttpRequest, post_id: SafeIDI64) -> ActixResult<HttpResponse> {
    BLOG_SERVICE.delete_post(post_id.0, &req).await
}

// 配置路由：阅读公开（草稿在服务层隐藏），写作需讲师/管理员
pub fn configure_blog_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/blogs")
            .service(
                web::scope("")
                    .guard(guard::Not(guard::Get()))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(create_post))
                    .route("/{id}", web::put().to(update_post))
                    .route("/{id}", web::delete().to(delete_post)),
            )
            .route("", web::get().to(list_posts))
            .route("/{slug}", web::get().to(get_post)),
    );
}
