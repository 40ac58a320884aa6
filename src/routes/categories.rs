use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::categories::requests::{
    CategoryListParams, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CategoryService;
use crate::utils::SafeIDI64;

static CATEGORY_SERVICE: Lazy<CategoryService> = Lazy::new(CategoryService::new_lazy);

pub async fn list_categories(
    req: HttpRequest,
    query: web::Query<CategoryListParams>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .list_categories(query.into_inner(), &req)
        .await
}

pub async fn create_category(
    req: HttpRequest,
    category_data: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .create_category(category_data.into_inner(), &req)
        .await
}

pub async fn update_category(
    req: HttpRequest,
    category_id: SafeIDI64,
    update_data: web::Json<UpdateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .update_category(category_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_category(
    req: HttpRequest,
    category_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.delete_category(category_id.0, &req).await
}

// 配置路由：列表公开，写操作仅管理员。
// 写操作 scope 以方法 guard 前置注册，避免与公开 GET 路由的路径冲突。
pub fn configure_category_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/categories")
            .service(
                web::scope("")
                    .guard(guard::Not(guard::Get()))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(create_category))
                    .route("/{id}", web::put().to(update_category))
                    .route("/{id}", web::delete().to(delete_category)),
            )
            .route("", web::get().to(list_categories)),
    );
}
