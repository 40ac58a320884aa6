pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::projects::entities::Project;
use crate::models::projects::requests::{
    CreateProjectRequest, ProjectListParams, UpdateProjectRequest,
};
use crate::models::users::entities::UserRole;
use crate::storage::Storage;

pub struct ProjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_projects(
        &self,
        query: ProjectListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_projects(self, query, request).await
    }

    pub async fn create_project(
        &self,
        project_data: CreateProjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_project(self, project_data, request).await
    }

    pub async fn update_project(
        &self,
        project_id: i64,
        update_data: UpdateProjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_project(self, project_id, update_data, request).await
    }

    pub async fn delete_project(
        &self,
        project_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_project(self, project_id, request).await
    }
}

/// 项目写权限：项目负责人或管理员
pub(crate) fn can_modify_project(request: &HttpRequest, project: &Project) -> bool {
    let role = RequireJWT::extract_user_role(request);
    let uid = RequireJWT::extract_user_id(request);

    match role {
        Some(UserRole::Admin) => true,
        Some(UserRole::Instructor) => uid == Some(project.owner_id),
        _ => false,
    }
}
