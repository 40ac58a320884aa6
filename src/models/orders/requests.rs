use serde::Deserialize;
use ts_rs::TS;

use super::entities::OrderStatus;
use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/order.ts")]
pub struct CreateOrderRequest {
    pub course_id: i64,
}

// 订单状态更新（管理员）。paid / cancelled。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/order.ts")]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/order.ts")]
pub struct OrderListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<OrderStatus>,
    pub course_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct OrderListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub user_id: Option<i64>,
    pub course_id: Option<i64>,
    pub status: Option<OrderStatus>,
}
