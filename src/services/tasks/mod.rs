pub mod create;
pub mod delete;
pub mod list;
pub mod status;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::projects::requests::{
    CreateTaskRequest, TaskListParams, UpdateTaskRequest, UpdateTaskStatusRequest,
};
use crate::storage::Storage;

pub struct TaskService {
    storage: Option<Arc<dyn Storage>>,
}

impl TaskService {
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

    pub async fn create_task(
        &self,
        project_id: i64,
        task_data: CreateTaskRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_task(self, project_id, task_data, request).await
    }

    pub async fn list_tasks(
        &self,
        project_id: i64,
        query: TaskListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_tasks(self, project_id, query, request).await
    }

    pub async fn update_task(
        &self,
        task_id: i64,
        update_data: UpdateTaskRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_task(self, task_id, update_data, request).await
    }

    pub async fn update_task_status(
        &self,
        task_id: i64,
        status_data: UpdateTaskStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::update_task_status(self, task_id, status_data, request).await
    }

    pub async fn delete_task(
        &self,
        task_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_task(self, task_id, request).await
    }
}
