use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseModuleService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::can_modify_course;

pub async fn delete_module(
    service: &CourseModuleService,
    module_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let module = match storage.get_course_module_by_id(module_id).await {
        Ok(Some(module)) => module,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleNotFound,
                "Module not found",
            )));
        }
        Err(e) => {
            error!("Failed to get module {}: {}", module_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get module: {e}"),
                )),
            );
        }
    };

    match storage.get_course_by_id(module.course_id).await {
        Ok(Some(course)) if can_modify_course(request, &course) => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::CoursePermissionDenied,
                "You do not have permission to modify this course",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to get course {}: {}", module.course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course: {e}"),
                )),
            );
        }
    }

    match storage.delete_course_module(module_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("章节删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "Module not found",
        ))),
        Err(e) => {
            error!("Failed to delete module {}: {}", module_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete module: {e}"),
                )),
            )
        }
    }
}
