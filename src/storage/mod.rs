use std::sync::Arc;

use crate::models::{
    accounting::{
        entities::AccountEntry,
        requests::{AccountEntryListQuery, CreateAccountEntryRequest},
        responses::{AccountEntryListResponse, JournalResponse},
    },
    audit::{
        entities::NewAuditLog,
        requests::AuditLogListQuery,
        responses::AuditLogListResponse,
    },
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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 分类管理方法
    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category>;
    async fn get_category_by_id(&self, id: i64) -> Result<Option<Category>>;
    async fn list_categories_with_pagination(
        &self,
        query: CategoryListQuery,
    ) -> Result<CategoryListResponse>;
    async fn update_category(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>>;
    async fn delete_category(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程（instructor_id 由服务层解析完成）
    async fn create_course(
        &self,
        instructor_id: i64,
        course: CreateCourseRequest,
    ) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 课程章节方法
    async fn create_course_module(
        &self,
        course_id: i64,
        module: CreateModuleRequest,
    ) -> Result<CourseModule>;
    async fn get_course_module_by_id(&self, id: i64) -> Result<Option<CourseModule>>;
    // 按 position 升序列出课程的全部章节
    async fn list_course_modules(&self, course_id: i64) -> Result<Vec<CourseModule>>;
    async fn update_course_module(
        &self,
        id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<CourseModule>>;
    async fn delete_course_module(&self, id: i64) -> Result<bool>;

    /// 选课方法
    async fn create_enrollment(&self, user_id: i64, course_id: i64) -> Result<Enrollment>;
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn get_enrollment_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>>;
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse>;
    // 更新学习进度；100 时置为 completed 并记录完成时间
    async fn update_enrollment_progress(
        &self,
        id: i64,
        progress: i32,
    ) -> Result<Option<Enrollment>>;
    // 退课（状态置为 dropped）
    async fn drop_enrollment(&self, id: i64) -> Result<bool>;

    /// 测验成绩方法
    async fn create_quiz_result(&self, result: SubmitQuizResultRequest) -> Result<QuizResult>;
    async fn list_quiz_results_with_pagination(
        &self,
        query: QuizResultListQuery,
    ) -> Result<QuizResultListResponse>;

    /// 证书方法
    async fn create_certificate(&self, enrollment_id: i64) -> Result<Certificate>;
    async fn get_certificate_by_id(&self, id: i64) -> Result<Option<Certificate>>;
    async fn get_certificate_by_enrollment(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Certificate>>;
    // 公开校验：按序列号取证书及课程名、持有人
    async fn get_certificate_verification(
        &self,
        serial: &str,
    ) -> Result<Option<CertificateVerifyResponse>>;
    async fn list_certificates_with_pagination(
        &self,
        query: CertificateListQuery,
    ) -> Result<CertificateListResponse>;
    // 吊销证书（状态翻转，不删除记录）
    async fn revoke_certificate(&self, id: i64) -> Result<bool>;

    /// 奖学金方法
    async fn create_scholarship(&self, scholarship: CreateScholarshipRequest)
    -> Result<Scholarship>;
    async fn get_scholarship_by_id(&self, id: i64) -> Result<Option<Scholarship>>;
    async fn list_scholarships_with_pagination(
        &self,
        query: ScholarshipListQuery,
    ) -> Result<ScholarshipListResponse>;
    async fn update_scholarship(
        &self,
        id: i64,
        update: UpdateScholarshipRequest,
    ) -> Result<Option<Scholarship>>;
    async fn delete_scholarship(&self, id: i64) -> Result<bool>;

    /// 奖学金申请方法
    async fn create_application(
        &self,
        scholarship_id: i64,
        user_id: i64,
        motivation: String,
    ) -> Result<ScholarshipApplication>;
    async fn get_application_by_id(&self, id: i64) -> Result<Option<ScholarshipApplication>>;
    async fn get_application_by_user_and_scholarship(
        &self,
        user_id: i64,
        scholarship_id: i64,
    ) -> Result<Option<ScholarshipApplication>>;
    async fn list_applications_with_pagination(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse>;
    // 审核：pending -> approved/rejected，记录审核人与时间
    async fn review_application(
        &self,
        id: i64,
        decision: ApplicationStatus,
        reviewer_id: i64,
    ) -> Result<Option<ScholarshipApplication>>;
    // 撤回：pending -> withdrawn
    async fn withdraw_application(&self, id: i64) -> Result<bool>;

    /// 会议方法
    async fn create_conference(&self, conference: CreateConferenceRequest) -> Result<Conference>;
    async fn get_conference_by_id(&self, id: i64) -> Result<Option<Conference>>;
    async fn list_conferences_with_pagination(
        &self,
        query: ConferenceListQuery,
    ) -> Result<ConferenceListResponse>;
    async fn update_conference(
        &self,
        id: i64,
        update: UpdateConferenceRequest,
    ) -> Result<Option<Conference>>;
    async fn delete_conference(&self, id: i64) -> Result<bool>;
    async fn count_conference_registrations(&self, conference_id: i64) -> Result<u64>;
    async fn create_conference_registration(
        &self,
        conference_id: i64,
        user_id: i64,
    ) -> Result<ConferenceRegistration>;
    async fn get_registration_by_user_and_conference(
        &self,
        user_id: i64,
        conference_id: i64,
    ) -> Result<Option<ConferenceRegistration>>;
    async fn delete_conference_registration(
        &self,
        conference_id: i64,
        user_id: i64,
    ) -> Result<bool>;

    /// 博客方法
    async fn create_blog_post(
        &self,
        author_id: i64,
        post: CreateBlogPostRequest,
    ) -> Result<BlogPost>;
    async fn get_blog_post_by_id(&self, id: i64) -> Result<Option<BlogPost>>;
    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>>;
    async fn list_blog_posts_with_pagination(&self, query: BlogListQuery)
    -> Result<BlogListResponse>;
    async fn update_blog_post(
        &self,
        id: i64,
        update: UpdateBlogPostRequest,
    ) -> Result<Option<BlogPost>>;
    async fn delete_blog_post(&self, id: i64) -> Result<bool>;

    /// 项目方法
    async fn create_project(&self, owner_id: i64, project: CreateProjectRequest)
    -> Result<Project>;
    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>>;
    async fn list_projects_with_pagination(
        &self,
        query: ProjectListQuery,
    ) -> Result<ProjectListResponse>;
    async fn update_project(
        &self,
        id: i64,
        update: UpdateProjectRequest,
    ) -> Result<Option<Project>>;
    async fn delete_project(&self, id: i64) -> Result<bool>;

    /// 任务方法
    async fn create_task(&self, project_id: i64, task: CreateTaskRequest) -> Result<Task>;
    async fn get_task_by_id(&self, id: i64) -> Result<Option<Task>>;
    async fn list_tasks_with_pagination(&self, query: TaskListQuery) -> Result<TaskListResponse>;
    async fn update_task(&self, id: i64, update: UpdateTaskRequest) -> Result<Option<Task>>;
    // 单字段状态写入
    async fn update_task_status(&self, id: i64, status: TaskStatus) -> Result<Option<Task>>;
    async fn delete_task(&self, id: i64) -> Result<bool>;

    /// 咨询请求方法
    async fn create_consultancy_request(
        &self,
        user_id: Option<i64>,
        request: CreateConsultancyRequest,
    ) -> Result<ConsultancyRequest>;
    async fn get_consultancy_request_by_id(&self, id: i64) -> Result<Option<ConsultancyRequest>>;
    async fn list_consultancy_requests_with_pagination(
        &self,
        query: ConsultancyListQuery,
    ) -> Result<ConsultancyListResponse>;
    async fn update_consultancy_status(
        &self,
        id: i64,
        status: ConsultancyStatus,
    ) -> Result<Option<ConsultancyRequest>>;

    /// 媒体文件方法
    async fn create_media_file(
        &self,
        owner_id: i64,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
    ) -> Result<MediaFile>;
    async fn get_media_file_by_token(&self, token: &str) -> Result<Option<MediaFile>>;
    async fn list_media_files_with_pagination(
        &self,
        query: MediaListQuery,
    ) -> Result<MediaListResponse>;

    /// 订单方法
    async fn create_order(&self, user_id: i64, course_id: i64, amount_cents: i64) -> Result<Order>;
    async fn get_order_by_id(&self, id: i64) -> Result<Option<Order>>;
    async fn list_orders_with_pagination(&self, query: OrderListQuery) -> Result<OrderListResponse>;
    // 状态写入；paid 时记录支付时间
    async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Option<Order>>;

    /// 账务方法
    async fn create_account_entry(
        &self,
        entry: CreateAccountEntryRequest,
    ) -> Result<AccountEntry>;
    async fn list_account_entries_with_pagination(
        &self,
        query: AccountEntryListQuery,
    ) -> Result<AccountEntryListResponse>;
    // 流水账视图：按时间排序并附借贷合计
    async fn journal_with_pagination(
        &self,
        query: AccountEntryListQuery,
    ) -> Result<JournalResponse>;

    /// 审计日志方法（只追加）
    async fn append_audit_log(&self, log: NewAuditLog) -> Result<()>;
    async fn list_audit_logs_with_pagination(
        &self,
        query: AuditLogListQuery,
    ) -> Result<AuditLogListResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
