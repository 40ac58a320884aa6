use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Project, Task};
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/project.ts")]
pub struct ProjectListResponse {
    pub items: Vec<Project>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/project.ts")]
pub struct TaskListResponse {
    pub items: Vec<Task>,
    pub pagination: PaginationInfo,
}
