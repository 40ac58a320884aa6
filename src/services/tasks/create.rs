use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TaskService;
use crate::models::projects::requests::CreateTaskRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::projects::can_modify_project;
use crate::utils::validate::validate_title;

pub async fn create_task(
    service: &TaskService,
    project_id: i64,
    task_data: CreateTaskRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_title(&task_data.title) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    let storage = service.get_storage(request);

    match storage.get_project_by_id(project_id).await {
        Ok(Some(project)) if can_modify_project(request, &project) => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ProjectPermissionDenied,
                "You do not have permission to modify this project",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ProjectNotFound,
                "Project not found",
            )));
        }
        Err(e) => {
            error!("Failed to get project {}: {}", project_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get project: {e}"),
                )),
            );
        }
    }

    match storage.create_task(project_id, task_data).await {
        Ok(task) => Ok(HttpResponse::Created().json(ApiResponse::success(task, "任务创建成功"))),
        Err(e) => {
            let msg = format!("Task creation failed: {e}");
            error!("{}", msg);
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::UserNotFound,
                    "Assignee does not exist",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
