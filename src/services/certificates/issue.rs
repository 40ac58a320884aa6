use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CertificateService;
use crate::middlewares::RequireJWT;
use crate::models::audit::entities::NewAuditLog;
use crate::models::certificates::requests::IssueCertificateRequest;
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 为已完成的选课记录签发证书
pub async fn issue_certificate(
    service: &CertificateService,
    issue_request: IssueCertificateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let enrollment_id = issue_request.enrollment_id;

    // 选课记录必须存在且已完成
    match storage.get_enrollment_by_id(enrollment_id).await {
        Ok(Some(enrollment)) => {
            if enrollment.status != EnrollmentStatus::Completed {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::EnrollmentNotCompleted,
                    "Enrollment is not completed",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            )));
        }
        Err(e) => {
            error!("Failed to get enrollment {}: {}", enrollment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get enrollment: {e}"),
                )),
            );
        }
    }

    // 同一选课记录只签发一次
    match storage.get_certificate_by_enrollment(enrollment_id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::CertificateAlreadyIssued,
                "A certificate has already been issued for this enrollment",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check existing certificate: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check existing certificate: {e}"),
                )),
            );
        }
    }

    match storage.create_certificate(enrollment_id).await {
        Ok(certificate) => {
            info!("Certificate {} issued", certificate.serial);
            if let Some(actor_id) = RequireJWT::extract_user_id(request) {
                let _ = storage
                    .append_audit_log(
                        NewAuditLog::new(
                            actor_id,
                            "certificate.issue",
                            "certificate",
                            certificate.id,
                        )
                        .with_detail(certificate.serial.clone()),
                    )
                    .await;
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(certificate, "证书签发成功")))
        }
        Err(e) => {
            error!("Certificate issue failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Certificate issue failed: {e}"),
                )),
            )
        }
    }
}
