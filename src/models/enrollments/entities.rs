use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::define_string_enum;

define_string_enum! {
    /// 选课状态
    EnrollmentStatus {
        Active => "active",
        Completed => "completed",
        Dropped => "dropped",
    }
}

// 选课记录：用户与课程的关联，带学习进度百分比
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    /// 学习进度百分比，0..=100
    pub progress: i32,
    pub status: EnrollmentStatus,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 测验成绩记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct QuizResult {
    pub id: i64,
    pub enrollment_id: i64,
    pub module_id: Option<i64>,
    pub score: i32,
    pub max_score: i32,
    pub taken_at: chrono::DateTime<chrono::Utc>,
}
