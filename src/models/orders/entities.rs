use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::define_string_enum;

define_string_enum! {
    OrderStatus {
        Pending => "pending",
        Paid => "paid",
        Cancelled => "cancelled",
    }
}

// 课程购买订单，金额在下单时从课程价格快照
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/order.ts")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub amount_cents: i64,
    pub status: OrderStatus,
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
