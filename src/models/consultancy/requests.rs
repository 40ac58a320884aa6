use serde::Deserialize;
use ts_rs::TS;

use super::entities::ConsultancyStatus;
use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/consultancy.ts")]
pub struct CreateConsultancyRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/consultancy.ts")]
pub struct UpdateConsultancyStatusRequest {
    pub status: ConsultancyStatus,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/consultancy.ts")]
pub struct ConsultancyListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<ConsultancyStatus>,
    /// 按关联用户过滤
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ConsultancyListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<ConsultancyStatus>,
    pub user_id: Option<i64>,
}
