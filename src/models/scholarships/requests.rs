use serde::Deserialize;
use ts_rs::TS;

use super::entities::{ApplicationStatus, ScholarshipStatus};
use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scholarship.ts")]
pub struct CreateScholarshipRequest {
    pub title: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub deadline: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scholarship.ts")]
pub struct UpdateScholarshipRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount_cents: Option<i64>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    pub status: Option<ScholarshipStatus>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scholarship.ts")]
pub struct ScholarshipListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub status: Option<ScholarshipStatus>,
}

#[derive(Debug, Clone)]
pub struct ScholarshipListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub status: Option<ScholarshipStatus>,
}

// 提交申请请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scholarship.ts")]
pub struct ApplyScholarshipRequest {
    pub motivation: String,
}

// 审核申请请求（管理员）。decision 只接受 approved / rejected。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scholarship.ts")]
pub struct ReviewApplicationRequest {
    pub decision: ApplicationStatus,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scholarship.ts")]
pub struct ApplicationListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub scholarship_id: Option<i64>,
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone)]
pub struct ApplicationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub scholarship_id: Option<i64>,
    pub user_id: Option<i64>,
    pub status: Option<ApplicationStatus>,
}
