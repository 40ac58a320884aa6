use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::AccountEntry;
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/accounting.ts")]
pub struct AccountEntryListResponse {
    pub items: Vec<AccountEntry>,
    pub pagination: PaginationInfo,
}

// 流水账视图：按时间排列的分录加借贷合计
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/accounting.ts")]
pub struct JournalResponse {
    pub items: Vec<AccountEntry>,
    pub pagination: PaginationInfo,
    pub total_debit_cents: i64,
    pub total_credit_cents: i64,
}
