use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CertificateService;
use crate::models::{ApiResponse, ErrorCode};

/// 公开校验接口：无需认证，凭序列号查询证书状态
pub async fn verify_certificate(
    service: &CertificateService,
    serial: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_certificate_verification(&serial).await {
        Ok(Some(verification)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(verification, "OK")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CertificateNotFound,
            "Certificate not found",
        ))),
        Err(e) => {
            error!("Certificate verification failed for {}: {}", serial, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Certificate verification failed: {e}"),
                )),
            )
        }
    }
}
