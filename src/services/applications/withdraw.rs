use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::scholarships::entities::ApplicationStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 撤回申请：仅申请人本人，且申请仍处于待审核状态
pub async fn withdraw_application(
    service: &ApplicationService,
    application_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.get_application_by_id(application_id).await {
        Ok(Some(application)) => {
            if application.user_id != user_id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "You can only withdraw your own application",
                )));
            }
            if application.status != ApplicationStatus::Pending {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ApplicationNotPending,
                    "Only pending applications can be withdrawn",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ApplicationNotFound,
                "Application not found",
            )));
        }
        Err(e) => {
            error!("Failed to get application {}: {}", application_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get application: {e}"),
                )),
            );
        }
    }

    match storage.withdraw_application(application_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("申请已撤回"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "Application not found",
        ))),
        Err(e) => {
            error!("Failed to withdraw application {}: {}", application_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to withdraw application: {e}"),
                )),
            )
        }
    }
}
