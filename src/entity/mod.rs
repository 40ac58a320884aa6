//! SeaORM 数据库实体定义

pub mod account_entries;
pub mod audit_logs;
pub mod blog_posts;
pub mod categories;
pub mod certificates;
pub mod conference_registrations;
pub mod conferences;
pub mod consultancy_requests;
pub mod course_modules;
pub mod courses;
pub mod enrollments;
pub mod media_files;
pub mod orders;
pub mod prelude;
pub mod projects;
pub mod quiz_results;
pub mod scholarship_applications;
pub mod scholarships;
pub mod tasks;
pub mod users;
