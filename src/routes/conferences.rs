use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::conferences::requests::{
    ConferenceListParams, CreateConferenceRequest, UpdateConferenceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ConferenceService;
use crate::utils::{SafeConferenceIdI64, SafeIDI64};

static CONFERENCE_SERVICE: Lazy<ConferenceService> = Lazy::new(ConferenceService::new_lazy);

pub async fn list_conferences(
    req: HttpRequest,
    query: web::Query<ConferenceListParams>,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE
        .list_conferences(query.into_inner(), &req)
        .await
}

pub async fn get_conference(
    req: HttpRequest,
    conference_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE
        .get_conference(conference_id.0, &req)
        .await
}

pub async fn create_conference(
    req: HttpRequest,
    conference_data: web::Json<CreateConferenceRequest>,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE
        .create_conference(conference_data.into_inner(), &req)
        .await
}

pub async fn update_conference(
    req: HttpRequest,
    conference_id: SafeIDI64,
    update_data: web::Json<UpdateConferenceRequest>,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE
        .update_conference(conference_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_conference(
    req: HttpRequest,
    conference_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE
        .delete_conference(conference_id.0, &req)
        .await
}

pub async fn register(
    req: HttpRequest,
    conference_id: SafeConferenceIdI64,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE.register(conference_id.0, &req).await
}

pub async fn unregister(
    req: HttpRequest,
    conference_id: SafeConferenceIdI64,
) -> ActixResult<HttpResponse> {
    CONFERENCE_SERVICE.unregister(conference_id.0, &req).await
}

// 配置路由：浏览公开，管理仅管理员，报名需登录。
// 报名 scope 路径更具体，先行注册。
pub fn configure_conference_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/conferences")
            .service(
                web::scope("/{conference_id}/register")
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(register))
                    .route("", web::delete().to(unregister)),
            )
            .service(
                web::scope("")
                    .guard(guard::Not(guard::Get()))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(create_conference))
                    .route("/{id}", web::put().to(update_conference))
                    .route("/{id}", web::delete().to(delete_conference)),
            )
            .route("", web::get().to(list_conferences))
            .route("/{id}", web::get().to(get_conference)),
    );
}
