use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::OrderService;
use crate::middlewares::RequireJWT;
use crate::models::orders::requests::{OrderListParams, OrderListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_orders(
    service: &OrderService,
    params: OrderListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let role = RequireJWT::extract_user_role(request);

    // 普通用户只看自己的订单
    let query = match role {
        Some(UserRole::Admin) => OrderListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            user_id: None,
            course_id: params.course_id,
            status: params.status,
        },
        _ => OrderListQuery {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            user_id: Some(user_id),
            course_id: params.course_id,
            status: params.status,
        },
    };

    let storage = service.get_storage(request);

    match storage.list_orders_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list orders: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list orders: {e}"),
                )),
            )
        }
    }
}
