use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Enrollment, QuizResult};
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListResponse {
    pub items: Vec<Enrollment>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct QuizResultListResponse {
    pub items: Vec<QuizResult>,
    pub pagination: PaginationInfo,
}
