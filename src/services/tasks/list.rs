use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TaskService;
use crate::middlewares::RequireJWT;
use crate::models::projects::requests::{TaskListParams, TaskListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_tasks(
    service: &TaskService,
    project_id: i64,
    params: TaskListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 项目负责人、管理员和被指派者均可查看
    let project = match storage.get_project_by_id(project_id).await {
        Ok(Some(project)) => project,
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
    };

    let role = RequireJWT::extract_user_role(request);
    let user_id = RequireJWT::extract_user_id(request);

    // 非负责人/管理员只能看指派给自己的任务
    let assignee_filter = match role {
        Some(UserRole::Admin) => params.assignee_id,
        _ if user_id == Some(project.owner_id) => params.assignee_id,
        _ => user_id,
    };

    let query = TaskListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        project_id: Some(project_id),
        status: params.status,
        assignee_id: assignee_filter,
    };

    match storage.list_tasks_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list tasks: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list tasks: {e}"),
                )),
            )
        }
    }
}
