pub mod accounting;
pub mod applications;
pub mod audit;
pub mod auth;
pub mod blogs;
pub mod categories;
pub mod certificates;
pub mod conferences;
pub mod consultancy;
pub mod course_modules;
pub mod courses;
pub mod enrollments;
pub mod media;
pub mod orders;
pub mod projects;
pub mod quiz_results;
pub mod scholarships;
pub mod tasks;
pub mod users;

pub use accounting::AccountingService;
pub use applications::ApplicationService;
pub use audit::AuditService;
pub use auth::AuthService;
pub use blogs::BlogService;
pub use categories::CategoryService;
pub use certificates::CertificateService;
pub use conferences::ConferenceService;
pub use consultancy::ConsultancyService;
pub use course_modules::CourseModuleService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use media::MediaService;
pub use orders::OrderService;
pub use projects::ProjectService;
pub use quiz_results::QuizResultService;
pub use scholarships::ScholarshipService;
pub use tasks::TaskService;
pub use users::UserService;
