use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::define_string_enum;

define_string_enum! {
    BlogStatus {
        Draft => "draft",
        Published => "published",
    }
}

// 博客文章，slug 由标题生成并保证唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/blog.ts")]
pub struct BlogPost {
    pub id: i64,
    pub author_id: i64,
    pub category_id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub status: BlogStatus,
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
