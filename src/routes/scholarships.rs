use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::scholarships::requests::{
    CreateScholarshipRequest, ScholarshipListParams, UpdateScholarshipRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ScholarshipService;
use crate::utils::SafeIDI64;

static SCHOLARSHIP_SERVICE: Lazy<ScholarshipService> = Lazy::new(ScholarshipService::new_lazy);

pub async fn list_scholarships(
    req: HttpRequest,
    query: web::Query<ScholarshipListParams>,
) -> ActixResult<HttpResponse> {
    SCHOLARSHIP_SERVICE
        .list_scholarships(query.into_inner(), &req)
        .await
}

pub async fn get_scholarship(
    req: HttpRequest,
    scholarship_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCHOLARSHIP_SERVICE
        .get_scholarship(scholarship_id.0, &req)
        .await
}

pub async fn create_scholarship(
    req: HttpRequest,
    scholarship_data: web::Json<CreateScholarshipRequest>,
) -> ActixResult<HttpResponse> {
    SCHOLARSHIP_SERVICE
        .create_scholarship(scholarship_data.into_inner(), &req)
        .await
}

pub async fn update_scholarship(
    req: HttpRequest,
    scholarship_id: SafeIDI64,
    update_data: web::Json<UpdateScholarshipRequest>,
) -> ActixResult<HttpResponse> {
    SCHOLARSHIP_SERVICE
        .update_scholarship(scholarship_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_scholarship(
    req: HttpRequest,
    scholarship_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCHOLARSHIP_SERVICE
        .delete_scholarship(scholarship_id.0, &req)
        .await
}

// 配置路由：浏览公开，管理仅管理员。
// 申请路由挂在 /scholarships/{scholarship_id}/apply，由 applications 模块先行注册。
pub fn configure_scholarship_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/scholarships")
            .service(
                web::scope("")
                    .guard(guard::Not(guard::Get()))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(create_scholarship))
                    .route("/{id}", web::put().to(update_scholarship))
                    .route("/{id}", web::delete().to(delete_scholarship)),
            )
            .route("", web::get().to(list_scholarships))
            .route("/{id}", web::get().to(get_scholarship)),
    );
}
