use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, CreateModuleRequest, UpdateCourseRequest,
    UpdateModuleRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{CourseModuleService, CourseService};
use crate::utils::{SafeCourseIdI64, SafeIDI64};

static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);
static MODULE_SERVICE: Lazy<CourseModuleService> = Lazy::new(CourseModuleService::new_lazy);

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

pub async fn list_modules(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.list_modules(course_id.0, &req).await
}

pub async fn create_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_data: web::Json<CreateModuleRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .create_module(course_id.0, module_data.into_inner(), &req)
        .await
}

pub async fn update_module(
    req: HttpRequest,
    module_id: SafeIDI64,
    update_data: web::Json<UpdateModuleRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .update_module(module_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_module(req: HttpRequest, module_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.delete_module(module_id.0, &req).await
}

// 配置路由：浏览公开（未发布内容在服务层隐藏），写操作需要讲师/管理员。
// 报名路由挂在 /courses/{course_id}/enroll，由 enrollments 模块先行注册。
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .service(
                web::scope("")
                    .guard(guard::Not(guard::Get()))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(create_course))
                    .route("/{id}", web::put().to(update_course))
                    .route("/{id}", web::delete().to(delete_course))
                    .route("/{course_id}/modules", web::post().to(create_module)),
            )
            .route("", web::get().to(list_courses))
            .route("/{id}", web::get().to(get_course))
            .route("/{course_id}/modules", web::get().to(list_modules)),
    );

    // 章节独立资源路径
    cfg.service(
        web::scope("/api/v1/modules")
            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::put().to(update_module))
            .route("/{id}", web::delete().to(delete_module)),
    );
}
