use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/media.ts")]
pub struct MediaListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
}

#[derive(Debug, Clone)]
pub struct MediaListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub owner_id: Option<i64>,
}
