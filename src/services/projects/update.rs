use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ProjectService, can_modify_project};
use crate::models::projects::requests::UpdateProjectRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_project(
    service: &ProjectService,
    project_id: i64,
    update_data: UpdateProjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
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

    match storage.update_project(project_id, update_data).await {
        Ok(Some(project)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(project, "项目更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProjectNotFound,
            "Project not found",
        ))),
        Err(e) => {
            error!("Project update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Project update failed: {e}"),
                )),
            )
        }
    }
}
