use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::define_string_enum;

define_string_enum! {
    CertificateStatus {
        Issued => "issued",
        Revoked => "revoked",
    }
}

// 结业证书：对一条已完成选课记录的认证，凭序列号可公开校验
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct Certificate {
    pub id: i64,
    pub enrollment_id: i64,
    /// 生成的唯一序列号，形如 `AC-2026-XXXXXXXX`
    pub serial: String,
    pub status: CertificateStatus,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}
