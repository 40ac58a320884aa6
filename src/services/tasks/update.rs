use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TaskService;
use crate::models::projects::requests::UpdateTaskRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::projects::can_modify_project;

pub async fn update_task(
    service: &TaskService,
    task_id: i64,
    update_data: UpdateTaskRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 任务编辑权限走父项目归属
    let task = match storage.get_task_by_id(task_id).await {
        Ok(Some(task)) => task,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TaskNotFound,
                "Task not found",
            )));
        }
        Err(e) => {
            error!("Failed to get task {}: {}", task_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get task: {e}"),
                )),
            );
        }
    };

    match storage.get_project_by_id(task.project_id).await {
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
            error!("Failed to get project {}: {}", task.project_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get project: {e}"),
                )),
            );
        }
    }

    match storage.update_task(task_id, update_data).await {
        Ok(Some(task)) => Ok(HttpResponse::Ok().json(ApiResponse::success(task, "任务更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TaskNotFound,
            "Task not found",
        ))),
        Err(e) => {
            error!("Task update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Task update failed: {e}"),
                )),
            )
        }
    }
}
