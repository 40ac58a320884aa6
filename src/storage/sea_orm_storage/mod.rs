//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod accounting;
mod audit;
mod blogs;
mod categories;
mod certificates;
mod conferences;
mod consultancy;
mod courses;
mod enrollments;
mod media;
mod orders;
mod projects;
mod scholarships;
mod users;

use crate::config::AppConfig;
use crate::errors::{AcademyError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AcademyError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AcademyError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AcademyError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AcademyError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AcademyError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    accounting::{
        entities::AccountEntry,
        requests::{AccountEntryListQuery, CreateAccountEntryRequest},
        responses::{AccountEntryListResponse, JournalResponse},
    },
    audit::{entities::NewAuditLog, requests::AuditLogListQuery, responses::AuditLogListResponse},
    blogs::{
        entities::BlogPost,
        requests::{BlogListQuery, CreateBlogPostRequest, UpdateBlogPostRequest},
        responses::BlogListResponse,
    },
    categories::{
        entities::Category,
        requests::{CategoryListQuery, CreateCategoryRequest, UpdateCategoryRequest},
        responses::CategoryListResponse,
    },
    certificates::{
        entities::Certificate,
        requests::CertificateListQuery,
        responses::{CertificateListResponse, CertificateVerifyResponse},
    },
    conferences::{
        entities::{Conference, ConferenceRegistration},
        requests::{ConferenceListQuery, CreateConferenceRequest, UpdateConferenceRequest},
        responses::ConferenceListResponse,
    },
    consultancy::{
        entities::{ConsultancyRequest, ConsultancyStatus},
        requests::{ConsultancyListQuery, CreateConsultancyRequest},
        responses::ConsultancyListResponse,
    },
    courses::{
        entities::{Course, CourseModule},
        requests::{
            CourseListQuery, CreateCourseRequest, CreateModuleRequest, UpdateCourseRequest,
            UpdateModuleRequest,
        },
        responses::CourseListResponse,
    },
    enrollments::{
        entities::{Enrollment, QuizResult},
        requests::{EnrollmentListQuery, QuizResultListQuery, SubmitQuizResultRequest},
        responses::{EnrollmentListResponse, QuizResultListResponse},
    },
    media::{entities::MediaFile, requests::MediaListQuery, responses::MediaListResponse},
    orders::{
        entities::{Order, OrderStatus},
        requests::OrderListQuery,
        responses::OrderListResponse,
    },
    projects::{
        entities::{Project, Task, TaskStatus},
        requests::{
            CreateProjectRequest, CreateTaskRequest, ProjectListQuery, TaskListQuery,
            UpdateProjectRequest, UpdateTaskRequest,
        },
        responses::{ProjectListResponse, TaskListResponse},
    },
    scholarships::{
        entities::{ApplicationStatus, Scholarship, ScholarshipApplication},
        requests::{
            ApplicationListQuery, CreateScholarshipRequest, ScholarshipListQuery,
            UpdateScholarshipRequest,
        },
        responses::{ApplicationListResponse, ScholarshipListResponse},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 分类模块
    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category> {
        self.create_category_impl(category).await
    }

    async fn get_category_by_id(&self, id: i64) -> Result<Option<Category>> {
        self.get_category_by_id_impl(id).await
    }

    async fn list_categories_with_pagination(
        &self,
        query: CategoryListQuery,
    ) -> Result<CategoryListResponse> {
        self.list_categories_with_pagination_impl(query).await
    }

    async fn update_category(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        self.update_category_impl(id, update).await
    }

    async fn delete_category(&self, id: i64) -> Result<bool> {
        self.delete_category_impl(id).await
    }

    // 课程模块
    async fn create_course(
        &self,
        instructor_id: i64,
        course: CreateCourseRequest,
    ) -> Result<Course> {
        self.create_course_impl(instructor_id, course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 课程章节模块
    async fn create_course_module(
        &self,
        course_id: i64,
        module: CreateModuleRequest,
    ) -> Result<CourseModule> {
        self.create_course_module_impl(course_id, module).await
    }

    async fn get_course_module_by_id(&self, id: i64) -> Result<Option<CourseModule>> {
        self.get_course_module_by_id_impl(id).await
    }

    async fn list_course_modules(&self, course_id: i64) -> Result<Vec<CourseModule>> {
        self.list_course_modules_impl(course_id).await
    }

    async fn update_course_module(
        &self,
        id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<CourseModule>> {
        self.update_course_module_impl(id, update).await
    }

    async fn delete_course_module(&self, id: i64) -> Result<bool> {
        self.delete_course_module_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(&self, user_id: i64, course_id: i64) -> Result<Enrollment> {
        self.create_enrollment_impl(user_id, course_id).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn get_enrollment_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_user_and_course_impl(user_id, course_id)
            .await
    }

    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_with_pagination_impl(query).await
    }

    async fn update_enrollment_progress(
        &self,
        id: i64,
        progress: i32,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_progress_impl(id, progress).await
    }

    async fn drop_enrollment(&self, id: i64) -> Result<bool> {
        self.drop_enrollment_impl(id).await
    }

    // 测验成绩模块
    async fn create_quiz_result(&self, result: SubmitQuizResultRequest) -> Result<QuizResult> {
        self.create_quiz_result_impl(result).await
    }

    async fn list_quiz_results_with_pagination(
        &self,
        query: QuizResultListQuery,
    ) -> Result<QuizResultListResponse> {
        self.list_quiz_results_with_pagination_impl(query).await
    }

    // 证书模块
    async fn create_certificate(&self, enrollment_id: i64) -> Result<Certificate> {
        self.create_certificate_impl(enrollment_id).await
    }

    async fn get_certificate_by_id(&self, id: i64) -> Result<Option<Certificate>> {
        self.get_certificate_by_id_impl(id).await
    }

    async fn get_certificate_by_enrollment(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Certificate>> {
        self.get_certificate_by_enrollment_impl(enrollment_id).await
    }

    async fn get_certificate_verification(
        &self,
        serial: &str,
    ) -> Result<Option<CertificateVerifyResponse>> {
        self.get_certificate_verification_impl(serial).await
    }

    async fn list_certificates_with_pagination(
        &self,
        query: CertificateListQuery,
    ) -> Result<CertificateListResponse> {
        self.list_certificates_with_pagination_impl(query).await
    }

    async fn revoke_certificate(&self, id: i64) -> Result<bool> {
        self.revoke_certificate_impl(id).await
    }

    // 奖学金模块
    async fn create_scholarship(
        &self,
        scholarship: CreateScholarshipRequest,
    ) -> Result<Scholarship> {
        self.create_scholarship_impl(scholarship).await
    }

    async fn get_scholarship_by_id(&self, id: i64) -> Result<Option<Scholarship>> {
        self.get_scholarship_by_id_impl(id).await
    }

    async fn list_scholarships_with_pagination(
        &self,
        query: ScholarshipListQuery,
    ) -> Result<ScholarshipListResponse> {
        self.list_scholarships_with_pagination_impl(query).await
    }

    async fn update_scholarship(
        &self,
        id: i64,
        update: UpdateScholarshipRequest,
    ) -> Result<Option<Scholarship>> {
        self.update_scholarship_impl(id, update).await
    }

    async fn delete_scholarship(&self, id: i64) -> Result<bool> {
        self.delete_scholarship_impl(id).await
    }

    // 奖学金申请模块
    async fn create_application(
        &self,
        scholarship_id: i64,
        user_id: i64,
        motivation: String,
    ) -> Result<ScholarshipApplication> {
        self.create_application_impl(scholarship_id, user_id, motivation)
            .await
    }

    async fn get_application_by_id(&self, id: i64) -> Result<Option<ScholarshipApplication>> {
        self.get_application_by_id_impl(id).await
    }

    async fn get_application_by_user_and_scholarship(
        &self,
        user_id: i64,
        scholarship_id: i64,
    ) -> Result<Option<ScholarshipApplication>> {
        self.get_application_by_user_and_scholarship_impl(user_id, scholarship_id)
            .await
    }

    async fn list_applications_with_pagination(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse> {
        self.list_applications_with_pagination_impl(query).await
    }

    async fn review_application(
        &self,
        id: i64,
        decision: ApplicationStatus,
        reviewer_id: i64,
    ) -> Result<Option<ScholarshipApplication>> {
        self.review_application_impl(id, decision, reviewer_id).await
    }

    async fn withdraw_application(&self, id: i64) -> Result<bool> {
        self.withdraw_application_impl(id).await
    }

    // 会议模块
    async fn create_conference(&self, conference: CreateConferenceRequest) -> Result<Conference> {
        self.create_conference_impl(conference).await
    }

    async fn get_conference_by_id(&self, id: i64) -> Result<Option<Conference>> {
        self.get_conference_by_id_impl(id).await
    }

    async fn list_conferences_with_pagination(
        &self,
        query: ConferenceListQuery,
    ) -> Result<ConferenceListResponse> {
        self.list_conferences_with_pagination_impl(query).await
    }

    async fn update_conference(
        &self,
        id: i64,
        update: UpdateConferenceRequest,
    ) -> Result<Option<Conference>> {
        self.update_conference_impl(id, update).await
    }

    async fn delete_conference(&self, id: i64) -> Result<bool> {
        self.delete_conference_impl(id).await
    }

    async fn count_conference_registrations(&self, conference_id: i64) -> Result<u64> {
        self.count_conference_registrations_impl(conference_id).await
    }

    async fn create_conference_registration(
        &self,
        conference_id: i64,
        user_id: i64,
    ) -> Result<ConferenceRegistration> {
        self.create_conference_registration_impl(conference_id, user_id)
            .await
    }

    async fn get_registration_by_user_and_conference(
        &self,
        user_id: i64,
        conference_id: i64,
    ) -> Result<Option<ConferenceRegistration>> {
        self.get_registration_by_user_and_conference_impl(user_id, conference_id)
            .await
    }

    async fn delete_conference_registration(
        &self,
        conference_id: i64,
        user_id: i64,
    ) -> Result<bool> {
        self.delete_conference_registration_impl(conference_id, user_id)
            .await
    }

    // 博客模块
    async fn create_blog_post(
        &self,
        author_id: i64,
        post: CreateBlogPostRequest,
    ) -> Result<BlogPost> {
        self.create_blog_post_impl(author_id, post).await
    }

    async fn get_blog_post_by_id(&self, id: i64) -> Result<Option<BlogPost>> {
        self.get_blog_post_by_id_impl(id).await
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        self.get_blog_post_by_slug_impl(slug).await
    }

    async fn list_blog_posts_with_pagination(
        &self,
        query: BlogListQuery,
    ) -> Result<BlogListResponse> {
        self.list_blog_posts_with_pagination_impl(query).await
    }

    async fn update_blog_post(
        &self,
        id: i64,
        update: UpdateBlogPostRequest,
    ) -> Result<Option<BlogPost>> {
        self.update_blog_post_impl(id, update).await
    }

    async fn delete_blog_post(&self, id: i64) -> Result<bool> {
        self.delete_blog_post_impl(id).await
    }

    // 项目模块
    async fn create_project(
        &self,
        owner_id: i64,
        project: CreateProjectRequest,
    ) -> Result<Project> {
        self.create_project_impl(owner_id, project).await
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>> {
        self.get_project_by_id_impl(id).await
    }

    async fn list_projects_with_pagination(
        &self,
        query: ProjectListQuery,
    ) -> Result<ProjectListResponse> {
        self.list_projects_with_pagination_impl(query).await
    }

    async fn update_project(
        &self,
        id: i64,
        update: UpdateProjectRequest,
    ) -> Result<Option<Project>> {
        self.update_project_impl(id, update).await
    }

    async fn delete_project(&self, id: i64) -> Result<bool> {
        self.delete_project_impl(id).await
    }

    // 任务模块
    async fn create_task(&self, project_id: i64, task: CreateTaskRequest) -> Result<Task> {
        self.create_task_impl(project_id, task).await
    }

    async fn get_task_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.get_task_by_id_impl(id).await
    }

    async fn list_tasks_with_pagination(&self, query: TaskListQuery) -> Result<TaskListResponse> {
        self.list_tasks_with_pagination_impl(query).await
    }

    async fn update_task(&self, id: i64, update: UpdateTaskRequest) -> Result<Option<Task>> {
        self.update_task_impl(id, update).await
    }

    async fn update_task_status(&self, id: i64, status: TaskStatus) -> Result<Option<Task>> {
        self.update_task_status_impl(id, status).await
    }

    async fn delete_task(&self, id: i64) -> Result<bool> {
        self.delete_task_impl(id).await
    }

    // 咨询模块
    async fn create_consultancy_request(
        &self,
        user_id: Option<i64>,
        request: CreateConsultancyRequest,
    ) -> Result<ConsultancyRequest> {
        self.create_consultancy_request_impl(user_id, request).await
    }

    async fn get_consultancy_request_by_id(&self, id: i64) -> Result<Option<ConsultancyRequest>> {
        self.get_consultancy_request_by_id_impl(id).await
    }

    async fn list_consultancy_requests_with_pagination(
        &self,
        query: ConsultancyListQuery,
    ) -> Result<ConsultancyListResponse> {
        self.list_consultancy_requests_with_pagination_impl(query)
            .await
    }

    async fn update_consultancy_status(
        &self,
        id: i64,
        status: ConsultancyStatus,
    ) -> Result<Option<ConsultancyRequest>> {
        self.update_consultancy_status_impl(id, status).await
    }

    // 媒体模块
    async fn create_media_file(
        &self,
        owner_id: i64,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
    ) -> Result<MediaFile> {
        self.create_media_file_impl(owner_id, original_name, stored_name, file_size, file_type)
            .await
    }

    async fn get_media_file_by_token(&self, token: &str) -> Result<Option<MediaFile>> {
        self.get_media_file_by_token_impl(token).await
    }

    async fn list_media_files_with_pagination(
        &self,
        query: MediaListQuery,
    ) -> Result<MediaListResponse> {
        self.list_media_files_with_pagination_impl(query).await
    }

    // 订单模块
    async fn create_order(&self, user_id: i64, course_id: i64, amount_cents: i64) -> Result<Order> {
        self.create_order_impl(user_id, course_id, amount_cents).await
    }

    async fn get_order_by_id(&self, id: i64) -> Result<Option<Order>> {
        self.get_order_by_id_impl(id).await
    }

    async fn list_orders_with_pagination(
        &self,
        query: OrderListQuery,
    ) -> Result<OrderListResponse> {
        self.list_orders_with_pagination_impl(query).await
    }

    async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Option<Order>> {
        self.update_order_status_impl(id, status).await
    }

    // 账务模块
    async fn create_account_entry(
        &self,
        entry: CreateAccountEntryRequest,
    ) -> Result<AccountEntry> {
        self.create_account_entry_impl(entry).await
    }

    async fn list_account_entries_with_pagination(
        &self,
        query: AccountEntryListQuery,
    ) -> Result<AccountEntryListResponse> {
        self.list_account_entries_with_pagination_impl(query).await
    }

    async fn journal_with_pagination(
        &self,
        query: AccountEntryListQuery,
    ) -> Result<JournalResponse> {
        self.journal_with_pagination_impl(query).await
    }

    // 审计模块
    async fn append_audit_log(&self, log: NewAuditLog) -> Result<()> {
        self.append_audit_log_impl(log).await
    }

    async fn list_audit_logs_with_pagination(
        &self,
        query: AuditLogListQuery,
    ) -> Result<AuditLogListResponse> {
        self.list_audit_logs_with_pagination_impl(query).await
    }
}
