use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::status::define_string_enum;

define_string_enum! {
    ProjectStatus {
        Active => "active",
        Archived => "archived",
    }
}

define_string_enum! {
    /// 任务状态
    TaskStatus {
        Todo => "todo",
        InProgress => "in_progress",
        Completed => "completed",
    }
}

// 科研/教学项目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/project.ts")]
pub struct Project {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 项目任务
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/project.ts")]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub assignee_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
