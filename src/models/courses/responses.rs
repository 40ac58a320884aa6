use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Course, CourseModule};
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}

// 课程详情（附章节目录）
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseDetailResponse {
    pub course: Course,
    pub modules: Vec<CourseModule>,
}
