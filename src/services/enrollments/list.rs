use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::{EnrollmentListParams, EnrollmentListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_enrollments(
    service: &EnrollmentService,
    params: EnrollmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let role = RequireJWT::extract_user_role(request);

    // 学员只能看自己的选课；讲师/管理员可以按课程或用户过滤
    let query = match role {
        Some(UserRole::Instructor) | Some(UserRole::Admin) => EnrollmentListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            course_id: params.course_id,
            user_id: params.user_id,
        },
        _ => EnrollmentListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            course_id: params.course_id,
            user_id: Some(user_id),
        },
    };

    let storage = service.get_storage(request);

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list enrollments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list enrollments: {e}"),
                )),
            )
        }
    }
}
