use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{CourseService, can_modify_course};
use crate::models::courses::entities::CourseStatus;
use crate::models::courses::responses::CourseDetailResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 课程详情（附章节目录）。未发布课程只有归属讲师和管理员可见。
pub async fn get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to get course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course: {e}"),
                )),
            );
        }
    };

    if course.status != CourseStatus::Published && !can_modify_course(request, &course) {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        )));
    }

    match storage.list_course_modules(course_id).await {
        Ok(modules) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseDetailResponse { course, modules },
            "OK",
        ))),
        Err(e) => {
            error!("Failed to list modules for course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list course modules: {e}"),
                )),
            )
        }
    }
}
