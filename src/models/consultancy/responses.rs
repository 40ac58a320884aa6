use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::ConsultancyRequest;
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/consultancy.ts")]
pub struct ConsultancyListResponse {
    pub items: Vec<ConsultancyRequest>,
    pub pagination: PaginationInfo,
}
