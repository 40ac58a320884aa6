use serde::Deserialize;
use ts_rs::TS;

use super::entities::BlogStatus;
use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/blog.ts")]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub body: String,
    pub category_id: Option<i64>,
    #[serde(default = "default_status")]
    pub status: BlogStatus,
}

fn default_status() -> BlogStatus {
    BlogStatus::Draft
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/blog.ts")]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category_id: Option<i64>,
    pub status: Option<BlogStatus>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/blog.ts")]
pub struct BlogListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub author_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct BlogListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub author_id: Option<i64>,
    pub status: Option<BlogStatus>,
}
