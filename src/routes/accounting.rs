use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::accounting::requests::{AccountEntryListParams, CreateAccountEntryRequest};
use crate::models::users::entities::UserRole;
use crate::services::AccountingService;

static ACCOUNTING_SERVICE: Lazy<AccountingService> = Lazy::new(AccountingService::new_lazy);

pub async fn create_entry(
    req: HttpRequest,
    entry_data: web::Json<CreateAccountEntryRequest>,
) -> ActixResult<HttpResponse> {
    ACCOUNTING_SERVICE
        .create_entry(entry_data.into_inner(), &req)
        .await
}

pub async fn list_entries(
    req: HttpRequest,
    query: web::Query<AccountEntryListParams>,
) -> ActixResult<HttpResponse> {
    ACCOUNTING_SERVICE
        .list_entries(query.into_inner(), &req)
        .await
}

pub async fn journal(
    req: HttpRequest,
    query: web::Query<AccountEntryListParams>,
) -> ActixResult<HttpResponse> {
    ACCOUNTING_SERVICE.journal(query.into_inner(), &req).await
}

// 配置路由：账务仅管理员
pub fn configure_accounting_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/accounting")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/entries", web::post().to(create_entry))
            .route("/entries", web::get().to(list_entries))
            .route("/journal", web::get().to(journal)),
    );
}
