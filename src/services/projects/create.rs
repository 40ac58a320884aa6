use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProjectService;
use crate::middlewares::RequireJWT;
use crate::models::projects::requests::CreateProjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_title;

pub async fn create_project(
    service: &ProjectService,
    project_data: CreateProjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_title(&project_data.title) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    let Some(owner_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.create_project(owner_id, project_data).await {
        Ok(project) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(project, "项目创建成功")))
        }
        Err(e) => {
            error!("Project creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Project creation failed: {e}"),
                )),
            )
        }
    }
}
