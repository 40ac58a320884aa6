use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::QuizResultService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::enrollments::requests::SubmitQuizResultRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn submit_quiz_result(
    service: &QuizResultService,
    result: SubmitQuizResultRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if result.max_score <= 0 || result.score < 0 || result.score > result.max_score {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::QuizResultInvalid,
            "Score must be between 0 and max_score",
        )));
    }

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 只能对自己的进行中选课提交成绩
    match storage.get_enrollment_by_id(result.enrollment_id).await {
        Ok(Some(enrollment)) => {
            if enrollment.user_id != user_id {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "You can only submit results for your own enrollment",
                )));
            }
            if enrollment.status != EnrollmentStatus::Active {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::QuizResultInvalid,
                    "Enrollment is not active",
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
            error!("Failed to get enrollment {}: {}", result.enrollment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get enrollment: {e}"),
                )),
            );
        }
    }

    match storage.create_quiz_result(result).await {
        Ok(quiz_result) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(quiz_result, "成绩已记录")))
        }
        Err(e) => {
            let msg = format!("Failed to record quiz result: {e}");
            error!("{}", msg);
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ModuleNotFound,
                    "Module does not exist",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
