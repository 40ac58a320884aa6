use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::UpdateProgressRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_progress;

pub async fn update_progress(
    service: &EnrollmentService,
    enrollment_id: i64,
    update: UpdateProgressRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_progress(update.progress) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentProgressInvalid,
            msg,
        )));
    }

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 只有本人或管理员可更新进度
    let enrollment = match storage.get_enrollment_by_id(enrollment_id).await {
        Ok(Some(enrollment)) => enrollment,
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
    };

    let role = RequireJWT::extract_user_role(request);
    if enrollment.user_id != user_id && role != Some(UserRole::Admin) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only update your own progress",
        )));
    }

    match storage
        .update_enrollment_progress(enrollment_id, update.progress)
        .await
    {
        Ok(Some(enrollment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment, "进度更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => {
            error!("Failed to update progress: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update progress: {e}"),
                )),
            )
        }
    }
}
