use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Conference, ConferenceRegistration};
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct ConferenceListResponse {
    pub items: Vec<Conference>,
    pub pagination: PaginationInfo,
}

// 会议详情（附当前报名人数）
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct ConferenceDetailResponse {
    pub conference: Conference,
    pub registered_count: i64,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/conference.ts")]
pub struct RegistrationResponse {
    pub registration: ConferenceRegistration,
}
