use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AuditService;
use crate::models::audit::requests::{AuditLogListParams, AuditLogListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_logs(
    service: &AuditService,
    params: AuditLogListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let query: AuditLogListQuery = params.into();

    match storage.list_audit_logs_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list audit logs: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list audit logs: {e}"),
                )),
            )
        }
    }
}
