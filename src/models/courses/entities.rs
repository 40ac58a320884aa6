use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::define_string_enum;

define_string_enum! {
    /// 课程状态
    CourseStatus {
        Draft => "draft",
        Published => "published",
        Archived => "archived",
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub instructor_id: i64,
    pub category_id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    /// 价格（分）。0 表示免费课程。
    pub price_cents: i64,
    pub status: CourseStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 课程章节实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseModule {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub content: Option<String>,
    /// 章节在课程内的排序位置，从 1 开始
    pub position: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
