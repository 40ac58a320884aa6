use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::BlogPost;
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/blog.ts")]
pub struct BlogListResponse {
    pub items: Vec<BlogPost>,
    pub pagination: PaginationInfo,
}
