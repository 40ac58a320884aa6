use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ScholarshipService;
use crate::middlewares::RequireJWT;
use crate::models::audit::entities::NewAuditLog;
use crate::models::scholarships::requests::CreateScholarshipRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_title;

pub async fn create_scholarship(
    service: &ScholarshipService,
    scholarship_data: CreateScholarshipRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_title(&scholarship_data.title) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if scholarship_data.amount_cents <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Amount must be positive",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_scholarship(scholarship_data).await {
        Ok(scholarship) => {
            if let Some(actor_id) = RequireJWT::extract_user_id(request) {
                let _ = storage
                    .append_audit_log(NewAuditLog::new(
                        actor_id,
                        "scholarship.create",
                        "scholarship",
                        scholarship.id,
                    ))
                    .await;
            }
            Ok(HttpResponse::Created().json(ApiResponse::success(scholarship, "奖学金创建成功")))
        }
        Err(e) => {
            error!("Scholarship creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Scholarship creation failed: {e}"),
                )),
            )
        }
    }
}
