use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProjectService;
use crate::middlewares::RequireJWT;
use crate::models::projects::requests::{ProjectListParams, ProjectListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_projects(
    service: &ProjectService,
    params: ProjectListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let role = RequireJWT::extract_user_role(request);

    // 讲师只看到自己负责的项目
    let owner_id = match role {
        Some(UserRole::Admin) => None,
        _ => Some(user_id),
    };

    let query = ProjectListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
        owner_id,
        status: params.status,
    };

    let storage = service.get_storage(request);

    match storage.list_projects_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list projects: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list projects: {e}"),
                )),
            )
        }
    }
}
