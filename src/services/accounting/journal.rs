use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AccountingService;
use crate::models::accounting::requests::AccountEntryListParams;
use crate::models::{ApiResponse, ErrorCode};

/// 流水账视图：时间升序 + 借贷合计
pub async fn journal(
    service: &AccountingService,
    params: AccountEntryListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.journal_with_pagination(params.into()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to build journal view: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to build journal view: {e}"),
                )),
            )
        }
    }
}
