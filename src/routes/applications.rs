use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::scholarships::requests::{
    ApplicationListParams, ApplyScholarshipRequest, ReviewApplicationRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ApplicationService;
use crate::utils::{SafeIDI64, SafeScholarshipIdI64};

static APPLICATION_SERVICE: Lazy<ApplicationService> = Lazy::new(ApplicationService::new_lazy);

pub async fn apply(
    req: HttpRequest,
    scholarship_id: SafeScholarshipIdI64,
    apply_request: web::Json<ApplyScholarshipRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .apply(scholarship_id.0, apply_request.into_inner(), &req)
        .await
}

pub async fn list_applications(
    req: HttpRequest,
    query: web::Query<ApplicationListParams>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .list_applications(query.into_inner(), &req)
        .await
}

pub async fn review_application(
    req: HttpRequest,
    application_id: SafeIDI64,
    review_request: web::Json<ReviewApplicationRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .review_application(application_id.0, review_request.into_inner(), &req)
        .await
}

pub async fn withdraw_application(
    req: HttpRequest,
    application_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .withdraw_application(application_id.0, &req)
        .await
}

// 配置路由
pub fn configure_application_routes(cfg: &mut web::ServiceConfig) {
    // 申请挂在奖学金资源下
    cfg.service(
        web::scope("/api/v1/scholarships/{scholarship_id}/apply")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(apply)),
    );

    cfg.service(
        web::scope("/api/v1/applications")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_applications))
            .route("/{id}", web::delete().to(withdraw_application))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("/{id}/review", web::put().to(review_application)),
            ),
    );
}
