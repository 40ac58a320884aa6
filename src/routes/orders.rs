use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::orders::requests::{
    CreateOrderRequest, OrderListParams, UpdateOrderStatusRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::OrderService;
use crate::utils::SafeIDI64;

static ORDER_SERVICE: Lazy<OrderService> = Lazy::new(OrderService::new_lazy);

pub async fn create_order(
    req: HttpRequest,
    order_data: web::Json<CreateOrderRequest>,
) -> ActixResult<HttpResponse> {
    ORDER_SERVICE.create_order(order_data.into_inner(), &req).await
}

pub async fn get_order(req: HttpRequest, order_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ORDER_SERVICE.get_order(order_id.0, &req).await
}

pub async fn list_orders(
    req: HttpRequest,
    query: web::Query<OrderListParams>,
) -> ActixResult<HttpResponse> {
    ORDER_SERVICE.list_orders(query.into_inner(), &req).await
}

pub async fn update_order_status(
    req: HttpRequest,
    order_id: SafeIDI64,
    status_data: web::Json<UpdateOrderStatusRequest>,
) -> ActixResult<HttpResponse> {
    ORDER_SERVICE
        .update_order_status(order_id.0, status_data.into_inner(), &req)
        .await
}

// 配置路由：下单与查询需登录，状态流转仅管理员
pub fn configure_order_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/orders")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_order))
            .route("", web::get().to(list_orders))
            .route("/{id}", web::get().to(get_order))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("/{id}/status", web::put().to(update_order_status)),
            ),
    );
}
