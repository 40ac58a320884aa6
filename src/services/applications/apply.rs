use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::scholarships::entities::ScholarshipStatus;
use crate::models::scholarships::requests::ApplyScholarshipRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn apply(
    service: &ApplicationService,
    scholarship_id: i64,
    apply_request: ApplyScholarshipRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if apply_request.motivation.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Motivation must not be empty",
        )));
    }

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 只能申请开放中的奖学金，且截止时间未过
    match storage.get_scholarship_by_id(scholarship_id).await {
        Ok(Some(scholarship)) => {
            if scholarship.status != ScholarshipStatus::Open
                || scholarship.deadline < chrono::Utc::now()
            {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ScholarshipClosed,
                    "Scholarship is closed for applications",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScholarshipNotFound,
                "Scholarship not found",
            )));
        }
        Err(e) => {
            error!("Failed to get scholarship {}: {}", scholarship_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get scholarship: {e}"),
                )),
            );
        }
    }

    // 同一奖学金只允许一条申请
    match storage
        .get_application_by_user_and_scholarship(user_id, scholarship_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyApplied,
                "You have already applied for this scholarship",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check application: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check application: {e}"),
                )),
            );
        }
    }

    match storage
        .create_application(scholarship_id, user_id, apply_request.motivation)
        .await
    {
        Ok(application) => {
            info!(
                "User {} applied for scholarship {}",
                user_id, scholarship_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(application, "申请提交成功")))
        }
        Err(e) => {
            let msg = format!("Application failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyApplied,
                    "You have already applied for this scholarship",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
