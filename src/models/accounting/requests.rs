use serde::Deserialize;
use ts_rs::TS;

use super::entities::EntryDirection;
use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/accounting.ts")]
pub struct CreateAccountEntryRequest {
    pub account: String,
    pub direction: EntryDirection,
    pub amount_cents: i64,
    pub reference: Option<String>,
    pub memo: Option<String>,
    pub entry_date: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/accounting.ts")]
pub struct AccountEntryListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub account: Option<String>,
    pub direction: Option<EntryDirection>,
    pub from: Option<chrono::DateTime<chrono::Utc>>,
    pub to: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone)]
pub struct AccountEntryListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub account: Option<String>,
    pub direction: Option<EntryDirection>,
    pub from: Option<chrono::DateTime<chrono::Utc>>,
    pub to: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<AccountEntryListParams> for AccountEntryListQuery {
    fn from(params: AccountEntryListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            account: params.account,
            direction: params.direction,
            from: params.from,
            to: params.to,
        }
    }
}
