use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CertificateService;
use crate::middlewares::RequireJWT;
use crate::models::certificates::requests::{CertificateListParams, CertificateListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_certificates(
    service: &CertificateService,
    params: CertificateListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let role = RequireJWT::extract_user_role(request);

    // 学员只能看自己的证书
    let query = match role {
        Some(UserRole::Instructor) | Some(UserRole::Admin) => CertificateListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            course_id: params.course_id,
            user_id: params.user_id,
        },
        _ => CertificateListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            course_id: params.course_id,
            user_id: Some(user_id),
        },
    };

    let storage = service.get_storage(request);

    match storage.list_certificates_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list certificates: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list certificates: {e}"),
                )),
            )
        }
    }
}
