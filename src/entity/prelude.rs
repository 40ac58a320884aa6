pub use super::account_entries::Entity as AccountEntries;
pub use super::audit_logs::Entity as AuditLogs;
pub use super::blog_posts::Entity as BlogPosts;
pub use super::categories::Entity as Categories;
pub use super::certificates::Entity as Certificates;
pub use super::conference_registrations::Entity as ConferenceRegistrations;
pub use super::conferences::Entity as Conferences;
pub use super::consultancy_requests::Entity as ConsultancyRequests;
pub use super::course_modules::Entity as CourseModules;
pub use super::courses::Entity as Courses;
pub use super::enrollments::Entity as Enrollments;
pub use super::media_files::Entity as MediaFiles;
pub use super::orders::Entity as Orders;
pub use super::projects::Entity as Projects;
pub use super::quiz_results::Entity as QuizResults;
pub use super::scholarship_applications::Entity as ScholarshipApplications;
pub use super::scholarships::Entity as Scholarships;
pub use super::tasks::Entity as Tasks;
pub use super::users::Entity as Users;
