use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::consultancy::requests::{
    ConsultancyListParams, CreateConsultancyRequest, UpdateConsultancyStatusRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ConsultancyService;
use crate::utils::SafeIDI64;

static CONSULTANCY_SERVICE: Lazy<ConsultancyService> = Lazy::new(ConsultancyService::new_lazy);

pub async fn create_request(
    req: HttpRequest,
    request_data: web::Json<CreateConsultancyRequest>,
) -> ActixResult<HttpResponse> {
    CONSULTANCY_SERVICE
        .create_request(request_data.into_inner(), &req)
        .await
}

pub async fn list_requests(
    req: HttpRequest,
    query: web::Query<ConsultancyListParams>,
) -> ActixResult<HttpResponse> {
    CONSULTANCY_SERVICE
        .list_requests(query.into_inner(), &req)
        .await
}

pub async fn update_status(
    req: HttpRequest,
    request_id: SafeIDI64,
    status_data: web::Json<UpdateConsultancyStatusRequest>,
) -> ActixResult<HttpResponse> {
    CONSULTANCY_SERVICE
        .update_status(request_id.0, status_data.into_inner(), &req)
        .await
}

// 配置路由：提交公开（限速），处理仅管理员
pub fn configure_consultancy_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/consultancy")
            .service(
                web::scope("")
                    .guard(guard::Post())
                    .wrap(RateLimit::consultancy())
                    .route("", web::post().to(create_request)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::get().to(list_requests))
                    .route("/{id}/status", web::put().to(update_status)),
            ),
    );
}
