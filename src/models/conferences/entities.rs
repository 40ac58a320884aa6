use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::define_string_enum;

define_string_enum! {
    ConferenceStatus {
        Announced => "announced",
        Open => "open",
        Closed => "closed",
    }
}

// 学术会议
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct Conference {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub location: String,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub ends_at: chrono::DateTime<chrono::Utc>,
    /// 报名人数上限，0 表示不限
    pub capacity: i32,
    pub status: ConferenceStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 会议报名记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct ConferenceRegistration {
    pub id: i64,
    pub conference_id: i64,
    pub user_id: i64,
    pub registered_at: chrono::DateTime<chrono::Utc>,
}
