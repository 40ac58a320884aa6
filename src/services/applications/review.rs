use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::audit::entities::NewAuditLog;
use crate::models::scholarships::entities::ApplicationStatus;
use crate::models::scholarships::requests::ReviewApplicationRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 审核申请：pending -> approved / rejected
pub async fn review_application(
    service: &ApplicationService,
    application_id: i64,
    review_request: ReviewApplicationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 审核结论只接受 approved / rejected
    if !matches!(
        review_request.decision,
        ApplicationStatus::Approved | ApplicationStatus::Rejected
    ) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Decision must be approved or rejected",
        )));
    }

    let Some(reviewer_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 只有待审核申请可被审核
    match storage.get_application_by_id(application_id).await {
        Ok(Some(application)) => {
            if application.status != ApplicationStatus::Pending {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ApplicationNotPending,
                    "Application has already been decided",
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

    match storage
        .review_application(application_id, review_request.decision, reviewer_id)
        .await
    {
        Ok(Some(application)) => {
            info!(
                "Application {} reviewed as {} by {}",
                application_id, application.status, reviewer_id
            );
            let detail = match review_request.comment {
                Some(comment) => format!("{}: {}", application.status, comment),
                None => application.status.to_string(),
            };
            let _ = storage
                .append_audit_log(
                    NewAuditLog::new(
                        reviewer_id,
                        "application.review",
                        "scholarship_application",
                        application_id,
                    )
                    .with_detail(detail),
                )
                .await;

            Ok(HttpResponse::Ok().json(ApiResponse::success(application, "审核完成")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ApplicationNotFound,
            "Application not found",
        ))),
        Err(e) => {
            error!("Failed to review application {}: {}", application_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to review application: {e}"),
                )),
            )
        }
    }
}
