use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码
//
// 分段约定：
// - 0        成功
// - 1xxx     通用错误
// - 2xxx     用户/认证
// - 3xxx     课程/章节/分类
// - 4xxx     选课/测验/证书
// - 5xxx     奖学金/申请
// - 6xxx     会议
// - 7xxx     博客/项目/任务/咨询
// - 8xxx     文件/媒体
// - 9xxx     订单/账务
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    NotFound = 1003,
    RateLimitExceeded = 1004,
    InternalServerError = 1999,

    // 用户与认证
    AuthFailed = 2000,
    RegisterFailed = 2001,
    UserNotFound = 2100,
    UserAlreadyExists = 2101,
    UserNameInvalid = 2102,
    UserEmailInvalid = 2103,
    UserPasswordInvalid = 2104,
    UserCreationFailed = 2105,
    UserUpdateFailed = 2106,
    UserDeleteFailed = 2107,
    CanNotDeleteCurrentUser = 2108,
    UserNameAlreadyExists = 2109,
    UserEmailAlreadyExists = 2110,

    // 课程与分类
    CategoryNotFound = 3000,
    CategoryAlreadyExists = 3001,
    CourseNotFound = 3100,
    CourseAlreadyExists = 3101,
    CourseNotPublished = 3102,
    CoursePermissionDenied = 3103,
    ModuleNotFound = 3200,

    // 选课、测验与证书
    EnrollmentNotFound = 4000,
    AlreadyEnrolled = 4001,
    EnrollmentProgressInvalid = 4002,
    QuizResultInvalid = 4100,
    CertificateNotFound = 4200,
    CertificateAlreadyIssued = 4201,
    EnrollmentNotCompleted = 4202,

    // 奖学金与申请
    ScholarshipNotFound = 5000,
    ScholarshipClosed = 5001,
    ApplicationNotFound = 5100,
    AlreadyApplied = 5101,
    ApplicationNotPending = 5102,

    // 会议
    ConferenceNotFound = 6000,
    ConferenceClosed = 6001,
    ConferenceFull = 6002,
    AlreadyRegistered = 6003,
    RegistrationNotFound = 6004,

    // 博客、项目、任务与咨询
    BlogPostNotFound = 7000,
    BlogSlugConflict = 7001,
    ProjectNotFound = 7100,
    ProjectPermissionDenied = 7101,
    TaskNotFound = 7200,
    TaskStatusInvalid = 7201,
    ConsultancyRequestNotFound = 7300,

    // 文件与媒体
    FileNotFound = 8000,
    FileUploadFailed = 8001,
    FileSizeExceeded = 8002,
    FileTypeNotAllowed = 8003,
    MultifileUploadNotAllowed = 8004,

    // 订单与账务
    OrderNotFound = 9000,
    OrderStatusInvalid = 9001,
    AccountEntryInvalid = 9100,
}
