use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_title;

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_title(&course_data.title) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if course_data.price_cents < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Price must not be negative",
        )));
    }

    let role = RequireJWT::extract_user_role(request);
    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let storage = service.get_storage(request);

    // 解析课程归属讲师
    // - 讲师创建：instructor_id 缺省为本人，指定他人则拒绝
    // - 管理员创建：必须指定讲师，且目标用户须为讲师角色
    let instructor_id = match role {
        Some(UserRole::Instructor) => match course_data.instructor_id {
            Some(id) if id != uid => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::CoursePermissionDenied,
                    "You do not have permission to create a course for another instructor",
                )));
            }
            _ => uid,
        },
        Some(UserRole::Admin) => {
            let Some(id) = course_data.instructor_id else {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "instructor_id is required when an admin creates a course",
                )));
            };
            match storage.get_user_by_id(id).await {
                Ok(Some(user)) if user.role == UserRole::Instructor => id,
                Ok(Some(_)) => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::CoursePermissionDenied,
                        "Admin can only create courses for instructors",
                    )));
                }
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::UserNotFound,
                        "Instructor not found",
                    )));
                }
                Err(e) => {
                    error!("Failed to get user by id: {}", e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Internal server error while fetching instructor",
                        ),
                    ));
                }
            }
        }
        _ => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::CoursePermissionDenied,
                "You do not have permission to create a course",
            )));
        }
    };

    match storage.create_course(instructor_id, course_data).await {
        Ok(course) => {
            info!("Course {} created successfully by {}", course.slug, uid);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(course, "Course created successfully")))
        }
        Err(e) => {
            let msg = format!("Course creation failed: {e}");
            error!("{}", msg);
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::CategoryNotFound,
                    "Category does not exist",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
