use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::entities::CourseStatus;
use crate::models::courses::requests::{CourseListParams, CourseListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_courses(
    service: &CourseService,
    params: CourseListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut query: CourseListQuery = params.into();

    // 非讲师/管理员只能看到已发布课程
    let role = RequireJWT::extract_user_role(request);
    if !matches!(role, Some(UserRole::Instructor) | Some(UserRole::Admin)) {
        query.status = Some(CourseStatus::Published);
    }

    match storage.list_courses_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list courses: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list courses: {e}"),
                )),
            )
        }
    }
}
