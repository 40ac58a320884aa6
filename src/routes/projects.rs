use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::projects::requests::{
    CreateProjectRequest, ProjectListParams, UpdateProjectRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ProjectService;
use crate::utils::SafeIDI64;

static PROJECT_SERVICE: Lazy<ProjectService> = Lazy::new(ProjectService::new_lazy);

pub async fn list_projects(
    req: HttpRequest,
    query: web::Query<ProjectListParams>,
) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE.list_projects(query.into_inner(), &req).await
}

pub async fn create_project(
    req: HttpRequest,
    project_data: web::Json<CreateProjectRequest>,
) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE
        .create_project(project_data.into_inner(), &req)
        .await
}

pub async fn update_project(
    req: HttpRequest,
    project_id: SafeIDI64,
    update_data: web::Json<UpdateProjectRequest>,
) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE
        .update_project(project_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_project(req: HttpRequest, project_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROJECT_SERVICE.delete_project(project_id.0, &req).await
}

// 配置路由：项目管理面向讲师/管理员
pub fn configure_project_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/projects")
            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_projects))
            .route("", web::post().to(create_project))
            .route("/{id}", web::put().to(update_project))
            .route("/{id}", web::delete().to(delete_project)),
    );
}
