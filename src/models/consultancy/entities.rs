use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::define_string_enum;

define_string_enum! {
    ConsultancyStatus {
        New => "new",
        InReview => "in_review",
        Closed => "closed",
    }
}

// 咨询请求
//
// 允许匿名提交；携带有效登录态时会关联到提交用户（user_id）。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/consultancy.ts")]
pub struct ConsultancyRequest {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: ConsultancyStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
