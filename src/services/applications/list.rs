use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ApplicationService;
use crate::middlewares::RequireJWT;
use crate::models::scholarships::requests::{ApplicationListParams, ApplicationListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_applications(
    service: &ApplicationService,
    params: ApplicationListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let role = RequireJWT::extract_user_role(request);

    // 申请人只能看自己的申请，管理员可以看全部
    let query = match role {
        Some(UserRole::Admin) => ApplicationListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            scholarship_id: params.scholarship_id,
            user_id: None,
            status: params.status,
        },
        _ => ApplicationListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            scholarship_id: params.scholarship_id,
            user_id: Some(user_id),
            status: params.status,
        },
    };

    let storage = service.get_storage(request);

    match storage.list_applications_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list applications: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list applications: {e}"),
                )),
            )
        }
    }
}
