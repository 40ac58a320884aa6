pub mod accounting;
pub mod applications;
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
pub mod quiz_results;
pub mod scholarships;
pub mod tasks;
pub mod users;

pub use accounting::configure_accounting_routes;
pub use applications::configure_application_routes;
pub use audit::configure_audit_routes;
pub use auth::configure_auth_routes;
pub use blogs::configure_blog_routes;
pub use categories::configure_category_routes;
pub use certificates::configure_certificate_routes;
pub use conferences::configure_conference_routes;
pub use consultancy::configure_consultancy_routes;
pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use media::configure_media_routes;
pub use orders::configure_order_routes;
pub use projects::configure_project_routes;
pub use quiz_results::configure_quiz_result_routes;
pub use scholarships::configure_scholarship_routes;
pub use tasks::configure_task_routes;
pub use users::configure_user_routes;
