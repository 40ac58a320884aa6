use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::MediaFile;
use crate::models::common::pagination::PaginationInfo;

// 上传成功响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/media.ts")]
pub struct MediaUploadResponse {
    pub download_token: String,
    pub file_name: String,
    pub size: i64,
    pub content_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/media.ts")]
pub struct MediaListResponse {
    pub items: Vec<MediaFile>,
    pub pagination: PaginationInfo,
}
