use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::OrderService;
use crate::middlewares::RequireJWT;
use crate::models::orders::responses::OrderResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_order(
    service: &OrderService,
    order_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.get_order_by_id(order_id).await {
        Ok(Some(order)) => {
            // 订单只对下单人和管理员可见
            let role = RequireJWT::extract_user_role(request);
            if order.user_id != user_id && role != Some(UserRole::Admin) {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::OrderNotFound,
                    "Order not found",
                )));
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(OrderResponse { order }, "OK")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::OrderNotFound,
            "Order not found",
        ))),
        Err(e) => {
            error!("Failed to get order {}: {}", order_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get order: {e}"),
                )),
            )
        }
    }
}
