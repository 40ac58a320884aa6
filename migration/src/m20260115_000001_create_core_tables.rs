use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建分类表
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Categories::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Categories::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Categories::Description).text().null())
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Categories::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::InstructorId).big_integer().not_null())
                    .col(ColumnDef::new(Courses::CategoryId).big_integer().null())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(
                        ColumnDef::new(Courses::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(ColumnDef::new(Courses::PriceCents).big_integer().not_null())
                    .col(ColumnDef::new(Courses::Status).string().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::InstructorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程章节表
        manager
            .create_table(
                Table::create()
                    .table(CourseModules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseModules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseModules::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseModules::Title).string().not_null())
                    .col(ColumnDef::new(CourseModules::Content).text().null())
                    .col(ColumnDef::new(CourseModules::Position).integer().not_null())
                    .col(
                        ColumnDef::new(CourseModules::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseModules::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseModules::Table, CourseModules::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollments::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Enrollments::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Enrollments::Progress).integer().not_null())
                    .col(ColumnDef::new(Enrollments::Status).string().not_null())
                    .col(
                        ColumnDef::new(Enrollments::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Enrollments::CompletedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一用户同一课程只允许一条选课记录
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_user_course")
                    .table(Enrollments::Table)
                    .col(Enrollments::UserId)
                    .col(Enrollments::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建测验成绩表
        manager
            .create_table(
                Table::create()
                    .table(QuizResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuizResults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(QuizResults::EnrollmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QuizResults::ModuleId).big_integer().null())
                    .col(ColumnDef::new(QuizResults::Score).integer().not_null())
                    .col(ColumnDef::new(QuizResults::MaxScore).integer().not_null())
                    .col(ColumnDef::new(QuizResults::TakenAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuizResults::Table, QuizResults::EnrollmentId)
                            .to(Enrollments::Table, Enrollments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuizResults::Table, QuizResults::ModuleId)
                            .to(CourseModules::Table, CourseModules::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建证书表
        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificates::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Certificates::EnrollmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certificates::Serial)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Certificates::Status).string().not_null())
                    .col(
                        ColumnDef::new(Certificates::IssuedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Certificates::Table, Certificates::EnrollmentId)
                            .to(Enrollments::Table, Enrollments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建奖学金表
        manager
            .create_table(
                Table::create()
                    .table(Scholarships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scholarships::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scholarships::Title).string().not_null())
                    .col(
                        ColumnDef::new(Scholarships::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Scholarships::Description).text().null())
                    .col(
                        ColumnDef::new(Scholarships::AmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::Deadline)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Scholarships::Status).string().not_null())
                    .col(
                        ColumnDef::new(Scholarships::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建奖学金申请表
        manager
            .create_table(
                Table::create()
                    .table(ScholarshipApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScholarshipApplications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipApplications::ScholarshipId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipApplications::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipApplications::Motivation)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipApplications::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipApplications::ReviewerId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipApplications::DecidedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipApplications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScholarshipApplications::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ScholarshipApplications::Table,
                                ScholarshipApplications::ScholarshipId,
                            )
                            .to(Scholarships::Table, Scholarships::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ScholarshipApplications::Table,
                                ScholarshipApplications::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一用户对同一奖学金只允许一条申请
        manager
            .create_index(
                Index::create()
                    .name("idx_applications_user_scholarship")
                    .table(ScholarshipApplications::Table)
                    .col(ScholarshipApplications::UserId)
                    .col(ScholarshipApplications::ScholarshipId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建会议表
        manager
            .create_table(
                Table::create()
                    .table(Conferences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conferences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Conferences::Title).string().not_null())
                    .col(
                        ColumnDef::new(Conferences::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Conferences::Description).text().null())
                    .col(ColumnDef::new(Conferences::Location).string().not_null())
                    .col(
                        ColumnDef::new(Conferences::StartsAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Conferences::EndsAt).big_integer().not_null())
                    .col(ColumnDef::new(Conferences::Capacity).integer().not_null())
                    .col(ColumnDef::new(Conferences::Status).string().not_null())
                    .col(
                        ColumnDef::new(Conferences::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conferences::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建会议报名表
        manager
            .create_table(
                Table::create()
                    .table(ConferenceRegistrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConferenceRegistrations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConferenceRegistrations::ConferenceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConferenceRegistrations::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConferenceRegistrations::RegisteredAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ConferenceRegistrations::Table,
                                ConferenceRegistrations::ConferenceId,
                            )
                            .to(Conferences::Table, Conferences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ConferenceRegistrations::Table,
                                ConferenceRegistrations::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_registrations_user_conference")
                    .table(ConferenceRegistrations::Table)
                    .col(ConferenceRegistrations::UserId)
                    .col(ConferenceRegistrations::ConferenceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建博客文章表
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPosts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::AuthorId).big_integer().not_null())
                    .col(ColumnDef::new(BlogPosts::CategoryId).big_integer().null())
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(
                        ColumnDef::new(BlogPosts::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::Body).text().not_null())
                    .col(ColumnDef::new(BlogPosts::Status).string().not_null())
                    .col(ColumnDef::new(BlogPosts::PublishedAt).big_integer().null())
                    .col(ColumnDef::new(BlogPosts::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(BlogPosts::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(BlogPosts::Table, BlogPosts::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BlogPosts::Table, BlogPosts::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建项目表
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Projects::Title).string().not_null())
                    .col(ColumnDef::new(Projects::Description).text().null())
                    .col(ColumnDef::new(Projects::Status).string().not_null())
                    .col(ColumnDef::new(Projects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Projects::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Projects::Table, Projects::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建任务表
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tasks::ProjectId).big_integer().not_null())
                    .col(ColumnDef::new(Tasks::AssigneeId).big_integer().null())
                    .col(ColumnDef::new(Tasks::Title).string().not_null())
                    .col(ColumnDef::new(Tasks::Description).text().null())
                    .col(ColumnDef::new(Tasks::Status).string().not_null())
                    .col(ColumnDef::new(Tasks::DueDate).big_integer().null())
                    .col(ColumnDef::new(Tasks::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Tasks::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tasks::Table, Tasks::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tasks::Table, Tasks::AssigneeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建咨询请求表
        manager
            .create_table(
                Table::create()
                    .table(ConsultancyRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConsultancyRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ConsultancyRequests::UserId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(ConsultancyRequests::Name).string().not_null())
                    .col(
                        ColumnDef::new(ConsultancyRequests::Email)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsultancyRequests::Subject)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsultancyRequests::Message)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsultancyRequests::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsultancyRequests::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsultancyRequests::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ConsultancyRequests::Table, ConsultancyRequests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建媒体文件表
        manager
            .create_table(
                Table::create()
                    .table(MediaFiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MediaFiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MediaFiles::OwnerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(MediaFiles::OriginalName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MediaFiles::StoredName).string().not_null())
                    .col(
                        ColumnDef::new(MediaFiles::DownloadToken)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(MediaFiles::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(MediaFiles::FileType).string().not_null())
                    .col(
                        ColumnDef::new(MediaFiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MediaFiles::Table, MediaFiles::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按外键依赖的逆序删除
        manager
            .drop_table(Table::drop().table(MediaFiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ConsultancyRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ConferenceRegistrations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Conferences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScholarshipApplications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scholarships::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuizResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseModules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    DisplayName,
    AvatarUrl,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    #[sea_orm(iden = "categories")]
    Table,
    Id,
    Name,
    Slug,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    InstructorId,
    CategoryId,
    Title,
    Slug,
    Description,
    PriceCents,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseModules {
    #[sea_orm(iden = "course_modules")]
    Table,
    Id,
    CourseId,
    Title,
    Content,
    Position,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    UserId,
    CourseId,
    Progress,
    Status,
    EnrolledAt,
    CompletedAt,
}

#[derive(DeriveIden)]
enum QuizResults {
    #[sea_orm(iden = "quiz_results")]
    Table,
    Id,
    EnrollmentId,
    ModuleId,
    Score,
    MaxScore,
    TakenAt,
}

#[derive(DeriveIden)]
enum Certificates {
    #[sea_orm(iden = "certificates")]
    Table,
    Id,
    EnrollmentId,
    Serial,
    Status,
    IssuedAt,
}

#[derive(DeriveIden)]
enum Scholarships {
    #[sea_orm(iden = "scholarships")]
    Table,
    Id,
    Title,
    Slug,
    Description,
    AmountCents,
    Deadline,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ScholarshipApplications {
    #[sea_orm(iden = "scholarship_applications")]
    Table,
    Id,
    ScholarshipId,
    UserId,
    Motivation,
    Status,
    ReviewerId,
    DecidedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Conferences {
    #[sea_orm(iden = "conferences")]
    Table,
    Id,
    Title,
    Slug,
    Description,
    Location,
    StartsAt,
    EndsAt,
    Capacity,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ConferenceRegistrations {
    #[sea_orm(iden = "conference_registrations")]
    Table,
    Id,
    ConferenceId,
    UserId,
    RegisteredAt,
}

#[derive(DeriveIden)]
enum BlogPosts {
    #[sea_orm(iden = "blog_posts")]
    Table,
    Id,
    AuthorId,
    CategoryId,
    Title,
    Slug,
    Body,
    Status,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    #[sea_orm(iden = "projects")]
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tasks {
    #[sea_orm(iden = "tasks")]
    Table,
    Id,
    ProjectId,
    AssigneeId,
    Title,
    Description,
    Status,
    DueDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ConsultancyRequests {
    #[sea_orm(iden = "consultancy_requests")]
    Table,
    Id,
    UserId,
    Name,
    Email,
    Subject,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MediaFiles {
    #[sea_orm(iden = "media_files")]
    Table,
    Id,
    OwnerId,
    OriginalName,
    StoredName,
    DownloadToken,
    FileSize,
    FileType,
    CreatedAt,
}
