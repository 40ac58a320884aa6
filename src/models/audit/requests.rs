use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/audit.ts")]
pub struct AuditLogListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub actor_id: Option<i64>,
    pub action: Option<String>,
    pub target_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuditLogListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub actor_id: Option<i64>,
    pub action: Option<String>,
    pub target_type: Option<String>,
}

impl From<AuditLogListParams> for AuditLogListQuery {
    fn from(params: AuditLogListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            actor_id: params.actor_id,
            action: params.action,
            target_type: params.target_type,
        }
    }
}
