use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 审计日志：管理操作的只追加记录，无更新/删除路径
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/audit.ts")]
pub struct AuditLog {
    pub id: i64,
    pub actor_id: i64,
    /// 操作名，如 "user.delete"、"application.review"
    pub action: String,
    pub target_type: String,
    pub target_id: i64,
    pub detail: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 写入审计日志用的载荷（storage 层内部使用）
#[derive(Debug, Clone)]
pub struct NewAuditLog {
    pub actor_id: i64,
    pub action: String,
    pub target_type: String,
    pub target_id: i64,
    pub detail: Option<String>,
}

impl NewAuditLog {
    pub fn new(
        actor_id: i64,
        action: impl Into<String>,
        target_type: impl Into<String>,
        target_id: i64,
    ) -> Self {
        Self {
            actor_id,
            action: action.into(),
            target_type: target_type.into(),
            target_id,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
