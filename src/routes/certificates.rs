use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::certificates::requests::{CertificateListParams, IssueCertificateRequest};
use crate::models::users::entities::UserRole;
use crate::services::CertificateService;
use crate::utils::{SafeCertificateSerial, SafeIDI64};

static CERTIFICATE_SERVICE: Lazy<CertificateService> = Lazy::new(CertificateService::new_lazy);

pub async fn issue_certificate(
    req: HttpRequest,
    issue_request: web::Json<IssueCertificateRequest>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .issue_certificate(issue_request.into_inner(), &req)
        .await
}

pub async fn list_certificates(
    req: HttpRequest,
    query: web::Query<CertificateListParams>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .list_certificates(query.into_inner(), &req)
        .await
}

pub async fn verify_certificate(
    req: HttpRequest,
    serial: SafeCertificateSerial,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE.verify_certificate(serial.0, &req).await
}

pub async fn revoke_certificate(
    req: HttpRequest,
    certificate_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .revoke_certificate(certificate_id.0, &req)
        .await
}

// 配置路由：校验公开（限速防枚举），签发需讲师/管理员，吊销仅管理员
pub fn configure_certificate_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/certificates")
            .service(
                web::scope("/verify")
                    .wrap(RateLimit::certificate_verify())
                    .route("/{serial}", web::get().to(verify_certificate)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .service(
                        web::scope("")
                            .guard(guard::Post())
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                            .route("", web::post().to(issue_certificate)),
                    )
                    .service(
                        web::scope("")
                            .guard(guard::Delete())
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                            .route("/{id}", web::delete().to(revoke_certificate)),
                    )
                    .route("", web::get().to(list_certificates)),
            ),
    );
}
