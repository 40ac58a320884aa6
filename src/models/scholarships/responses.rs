use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Scholarship, ScholarshipApplication};
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scholarship.ts")]
pub struct ScholarshipListResponse {
    pub items: Vec<Scholarship>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/scholarship.ts")]
pub struct ApplicationListResponse {
    pub items: Vec<ScholarshipApplication>,
    pub pagination: PaginationInfo,
}
