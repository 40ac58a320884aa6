use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::define_string_enum;

define_string_enum! {
    /// 记账方向
    EntryDirection {
        Debit => "debit",
        Credit => "credit",
    }
}

// 账务分录
//
// reference 记录业务来源（如 "order:42"、"scholarship:7"），
// 用于在流水账中回溯到产生该分录的业务对象。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/accounting.ts")]
pub struct AccountEntry {
    pub id: i64,
    pub account: String,
    pub direction: EntryDirection,
    pub amount_cents: i64,
    pub reference: Option<String>,
    pub memo: Option<String>,
    pub entry_date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
