use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseModuleService;
use crate::models::courses::requests::UpdateModuleRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::can_modify_course;

pub async fn update_module(
    service: &CourseModuleService,
    module_id: i64,
    update_data: UpdateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 归属校验经由父课程
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

    match storage.update_course_module(module_id, update_data).await {
        Ok(Some(module)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(module, "章节更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "Module not found",
        ))),
        Err(e) => {
            error!("Module update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Module update failed: {e}"),
                )),
            )
        }
    }
}
