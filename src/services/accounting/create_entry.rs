use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AccountingService;
use crate::middlewares::RequireJWT;
use crate::models::accounting::requests::CreateAccountEntryRequest;
use crate::models::audit::entities::NewAuditLog;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_entry(
    service: &AccountingService,
    entry_data: CreateAccountEntryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if entry_data.account.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AccountEntryInvalid,
            "Account must not be empty",
        )));
    }

    if entry_data.amount_cents <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AccountEntryInvalid,
            "Amount must be positive",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_account_entry(entry_data).await {
        Ok(entry) => {
            if let Some(actor_id) = RequireJWT::extract_user_id(request) {
                let _ = storage
                    .append_audit_log(NewAuditLog::new(
                        actor_id,
                        "accounting.entry",
                        "account_entry",
                        entry.id,
                    ))
                    .await;
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(entry, "分录已入账")))
        }
        Err(e) => {
            error!("Failed to create account entry: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create account entry: {e}"),
                )),
            )
        }
    }
}
