use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseModuleService;
use crate::models::courses::requests::CreateModuleRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::can_modify_course;
use crate::utils::validate::validate_title;

pub async fn create_module(
    service: &CourseModuleService,
    course_id: i64,
    module_data: CreateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_title(&module_data.title) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

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

    if !can_modify_course(request, &course) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CoursePermissionDenied,
            "You do not have permission to modify this course",
        )));
    }

    match storage.create_course_module(course_id, module_data).await {
        Ok(module) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(module, "章节创建成功")))
        }
        Err(e) => {
            error!("Module creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Module creation failed: {e}"),
                )),
            )
        }
    }
}
