use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::OrderService;
use crate::middlewares::RequireJWT;
use crate::models::courses::entities::CourseStatus;
use crate::models::orders::requests::CreateOrderRequest;
use crate::models::orders::responses::OrderResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 下单：金额从课程价格快照
pub async fn create_order(
    service: &OrderService,
    order_data: CreateOrderRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(order_data.course_id).await {
        Ok(Some(course)) if course.status == CourseStatus::Published => course,
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::CourseNotPublished,
                "Course is not available for purchase",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Failed to get course {}: {}", order_data.course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course: {e}"),
                )),
            );
        }
    };

    match storage
        .create_order(user_id, course.id, course.price_cents)
        .await
    {
        Ok(order) => {
            info!("Order {} created by user {}", order.id, user_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(OrderResponse { order }, "订单创建成功")))
        }
        Err(e) => {
            error!("Order creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Order creation failed: {e}"),
                )),
            )
        }
    }
}
