pub mod common;

pub mod accounting;
pub mod audit;
pub mod auth;
pub mod blogs;
pub mod categories;
pub mod certificates;
pub mod conferences;
pub mod consultancy;
pub mod courses;
pub mod enrollments;
pub mod media;
pub mod orders;
pub mod projects;
pub mod scholarships;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};

/// 应用启动时间（用于运行信息输出）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
