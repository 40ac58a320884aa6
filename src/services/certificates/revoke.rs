use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CertificateService;
use crate::middlewares::RequireJWT;
use crate::models::audit::entities::NewAuditLog;
use crate::models::{ApiResponse, ErrorCode};

/// 吊销证书：状态翻转为 revoked，记录保留可追溯
pub async fn revoke_certificate(
    service: &CertificateService,
    certificate_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.revoke_certificate(certificate_id).await {
        Ok(true) => {
            if let Some(actor_id) = RequireJWT::extract_user_id(request) {
                let _ = storage
                    .append_audit_log(NewAuditLog::new(
                        actor_id,
                        "certificate.revoke",
                        "certificate",
                        certificate_id,
                    ))
                    .await;
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("证书已吊销")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CertificateNotFound,
            "Certificate not found",
        ))),
        Err(e) => {
            error!("Failed to revoke certificate {}: {}", certificate_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to revoke certificate: {e}"),
                )),
            )
        }
    }
}
