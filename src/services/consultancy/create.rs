use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ConsultancyService;
use crate::models::consultancy::requests::CreateConsultancyRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;
use crate::utils::validate::validate_email;

/// 提交咨询请求。允许匿名；携带有效 access token 时关联到该用户。
pub async fn create_request(
    service: &ConsultancyService,
    request_data: CreateConsultancyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if request_data.name.trim().is_empty() || request_data.subject.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Name and subject must not be empty",
        )));
    }

    if request_data.message.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Message must not be empty",
        )));
    }

    if let Err(msg) = validate_email(&request_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // 可选用户关联：令牌无效时按匿名处理，不拒绝请求
    let user_id = JwtUtils::extract_optional_claims(request)
        .and_then(|claims| claims.sub.parse::<i64>().ok());

    let storage = service.get_storage(request);

    match storage
        .create_consultancy_request(user_id, request_data)
        .await
    {
        Ok(consultancy) => {
            info!(
                "Consultancy request {} created (linked user: {:?})",
                consultancy.id, consultancy.user_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(consultancy, "咨询请求已提交")))
        }
        Err(e) => {
            error!("Consultancy request creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consultancy request creation failed: {e}"),
                )),
            )
        }
    }
}
