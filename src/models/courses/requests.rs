use serde::Deserialize;
use ts_rs::TS;

use super::entities::CourseStatus;
use crate::models::common::pagination::PaginationQuery;

// 创建课程请求
//
// # instructor_id 字段说明
// - **讲师创建**：可选字段，不填写则自动使用当前登录讲师的 ID
// - **管理员创建**：必填字段，用于指定负责该课程的讲师
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub instructor_id: Option<i64>,
    pub category_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub price_cents: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub instructor_id: Option<i64>,
    pub status: Option<CourseStatus>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub instructor_id: Option<i64>,
    pub status: Option<CourseStatus>,
}

impl From<CourseListParams> for CourseListQuery {
    fn from(params: CourseListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            search: params.search,
            category_id: params.category_id,
            instructor_id: params.instructor_id,
            status: params.status,
        }
    }
}

// 章节请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateModuleRequest {
    pub title: String,
    pub content: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateModuleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub position: Option<i32>,
}
