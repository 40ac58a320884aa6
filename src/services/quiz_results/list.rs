use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::QuizResultService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::{QuizResultListParams, QuizResultListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_quiz_results(
    service: &QuizResultService,
    params: QuizResultListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let role = RequireJWT::extract_user_role(request);

    // 学员只能查自己的成绩；讲师/管理员可按课程或用户过滤
    let query = match role {
        Some(UserRole::Instructor) | Some(UserRole::Admin) => QuizResultListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            course_id: params.course_id,
            user_id: params.user_id,
        },
        _ => QuizResultListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            course_id: params.course_id,
            user_id: Some(user_id),
        },
    };

    let storage = service.get_storage(request);

    match storage.list_quiz_results_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list quiz results: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list quiz results: {e}"),
                )),
            )
        }
    }
}
