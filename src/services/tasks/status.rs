use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TaskService;
use crate::middlewares::RequireJWT;
use crate::models::projects::requests::UpdateTaskStatusRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::projects::can_modify_project;

/// 任务状态单字段写入：todo / in_progress / completed。
/// 被指派者也可以更新自己任务的状态。
pub async fn update_task_status(
    service: &TaskService,
    task_id: i64,
    status_data: UpdateTaskStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    let user_id = RequireJWT::extract_user_id(request);
    let is_assignee = task.assignee_id.is_some() && task.assignee_id == user_id;

    if !is_assignee {
        match storage.get_project_by_id(task.project_id).await {
            Ok(Some(project)) if can_modify_project(request, &project) => {}
            Ok(Some(_)) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ProjectPermissionDenied,
                    "You do not have permission to update this task",
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
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to get project: {e}"),
                    ),
                ));
            }
        }
    }

    match storage.update_task_status(task_id, status_data.status).await {
        Ok(Some(task)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(task, "任务状态已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TaskNotFound,
            "Task not found",
        ))),
        Err(e) => {
            error!("Task status update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Task status update failed: {e}"),
                )),
            )
        }
    }
}
