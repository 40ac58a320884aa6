use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Certificate, CertificateStatus};
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CertificateListResponse {
    pub items: Vec<Certificate>,
    pub pagination: PaginationInfo,
}

// 证书公开校验响应：不暴露持有人之外的内部 ID
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CertificateVerifyResponse {
    pub serial: String,
    pub status: CertificateStatus,
    pub course_title: String,
    pub holder_name: String,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}
