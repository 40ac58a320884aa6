use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{EnrollmentListParams, UpdateProgressRequest};
use crate::services::EnrollmentService;
use crate::utils::{SafeCourseIdI64, SafeIDI64};

static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn enroll(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.enroll(course_id.0, &req).await
}

pub async fn list_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_enrollments(query.into_inner(), &req)
        .await
}

pub async fn update_progress(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
    update: web::Json<UpdateProgressRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_progress(enrollment_id.0, update.into_inner(), &req)
        .await
}

pub async fn drop_enrollment(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.drop_enrollment(enrollment_id.0, &req).await
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    // 报名挂在课程资源下
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/enroll")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(enroll)),
    );

    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_enrollments))
            .route("/{id}/progress", web::put().to(update_progress))
            .route("/{id}", web::delete().to(drop_enrollment)),
    );
}
