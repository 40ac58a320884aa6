use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 媒体文件记录，下载凭 download_token
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/media.ts")]
pub struct MediaFile {
    pub id: i64,
    pub owner_id: i64,
    pub original_name: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub stored_name: String,
    pub download_token: String,
    pub file_size: i64,
    pub file_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
