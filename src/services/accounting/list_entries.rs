use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AccountingService;
use crate::models::accounting::requests::AccountEntryListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_entries(
    service: &AccountingService,
    params: AccountEntryListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_account_entries_with_pagination(params.into())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list account entries: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list account entries: {e}"),
                )),
            )
        }
    }
}
