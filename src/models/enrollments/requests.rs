use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

// 更新学习进度请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct UpdateProgressRequest {
    /// 0..=100，100 视为完成课程
    pub progress: i32,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    /// 管理员/讲师可按课程过滤
    pub course_id: Option<i64>,
    /// 管理员可按用户过滤
    pub user_id: Option<i64>,
}

// 存储层查询参数
#[derive(Debug, Clone)]
pub struct EnrollmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub user_id: Option<i64>,
}

// 提交测验成绩请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct SubmitQuizResultRequest {
    pub enrollment_id: i64,
    pub module_id: Option<i64>,
    pub score: i32,
    pub max_score: i32,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct QuizResultListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub course_id: Option<i64>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct QuizResultListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub user_id: Option<i64>,
}
