use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Order;
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/order.ts")]
pub struct OrderResponse {
    pub order: Order,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/order.ts")]
pub struct OrderListResponse {
    pub items: Vec<Order>,
    pub pagination: PaginationInfo,
}
