use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Category;
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CategoryListResponse {
    pub items: Vec<Category>,
    pub pagination: PaginationInfo,
}
