use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::projects::requests::{
    CreateTaskRequest, TaskListParams, UpdateTaskRequest, UpdateTaskStatusRequest,
};
use crate::services::TaskService;
use crate::utils::{SafeIDI64, SafeProjectIdI64};

static TASK_SERVICE: Lazy<TaskService> = Lazy::new(TaskService::new_lazy);

pub async fn create_task(
    req: HttpRequest,
    project_id: SafeProjectIdI64,
    task_data: web::Json<CreateTaskRequest>,
) -> ActixResult<HttpResponse> {
    TASK_SERVICE
        .create_task(project_id.0, task_data.into_inner(), &req)
        .await
}

pub async fn list_tasks(
    req: HttpRequest,
    project_id: SafeProjectIdI64,
    query: web::Query<TaskListParams>,
) -> ActixResult<HttpResponse> {
    TASK_SERVICE
        .list_tasks(project_id.0, query.into_inner(), &req)
        .await
}

pub async fn update_task(
    req: HttpRequest,
    task_id: SafeIDI64,
    update_data: web::Json<UpdateTaskRequest>,
) -> ActixResult<HttpResponse> {
    TASK_SERVICE
        .update_task(task_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn update_task_status(
    req: HttpRequest,
    task_id: SafeIDI64,
    status_data: web::Json<UpdateTaskStatusRequest>,
) -> ActixResult<HttpResponse> {
    TASK_SERVICE
        .update_task_status(task_id.0, status_data.into_inner(), &req)
        .await
}

pub async fn delete_task(req: HttpRequest, task_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TASK_SERVICE.delete_task(task_id.0, &req).await
}

// 配置路由：任务对所有登录用户开放（被指派者可能是学员），归属检查在服务层
pub fn configure_task_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/projects/{project_id}/tasks")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_tasks))
            .route("", web::post().to(create_task)),
    );

    cfg.service(
        web::scope("/api/v1/tasks")
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::put().to(update_task))
            .route("/{id}/status", web::put().to(update_task_status))
            .route("/{id}", web::delete().to(delete_task)),
    );
}
