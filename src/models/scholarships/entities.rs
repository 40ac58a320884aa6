use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::define_string_enum;

define_string_enum! {
    ScholarshipStatus {
        Open => "open",
        Closed => "closed",
    }
}

define_string_enum! {
    /// 奖学金申请状态
    ApplicationStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
        Withdrawn => "withdrawn",
    }
}

// 奖学金项目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scholarship.ts")]
pub struct Scholarship {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub status: ScholarshipStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 奖学金申请：用户针对某个奖学金项目的提交
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scholarship.ts")]
pub struct ScholarshipApplication {
    pub id: i64,
    pub scholarship_id: i64,
    pub user_id: i64,
    pub motivation: String,
    pub status: ApplicationStatus,
    pub reviewer_id: Option<i64>,
    pub decided_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
