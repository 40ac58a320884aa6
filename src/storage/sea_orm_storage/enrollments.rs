use super::SeaOrmStorage;
use crate::entity::enrollments::{self, ActiveModel, Column, Entity as Enrollments};
use crate::entity::quiz_results::{
    ActiveModel as QuizActiveModel, Column as QuizColumn, Entity as QuizResults, Relation,
};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    enrollments::{
        entities::{Enrollment, EnrollmentStatus, QuizResult},
        requests::{EnrollmentListQuery, QuizResultListQuery, SubmitQuizResultRequest},
        responses::{EnrollmentListResponse, QuizResultListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 创建选课记录，进度从 0 开始
    pub async fn create_enrollment_impl(&self, user_id: i64, course_id: i64) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            progress: Set(0),
            status: Set(EnrollmentStatus::Active.to_string()),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    pub async fn get_enrollment_by_user_and_course_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 分页列出选课记录
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Enrollments::find();

        if let Some(user_id) = query.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        select = select.order_by_desc(Column::EnrolledAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询选课总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询选课页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询选课列表失败: {e}")))?;

        Ok(EnrollmentListResponse {
            items: items.into_iter().map(|m| m.into_enrollment()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学习进度；100 视为完成并记录完成时间
    pub async fn update_enrollment_progress_impl(
        &self,
        id: i64,
        progress: i32,
    ) -> Result<Option<Enrollment>> {
        let existing = self.get_enrollment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            progress: Set(progress),
            ..Default::default()
        };

        if progress >= 100 {
            model.status = Set(EnrollmentStatus::Completed.to_string());
            model.completed_at = Set(Some(now));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新学习进度失败: {e}")))?;

        self.get_enrollment_by_id_impl(id).await
    }

    /// 退课：状态置为 dropped，保留记录
    pub async fn drop_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(EnrollmentStatus::Dropped.to_string()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("退课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 记录测验成绩
    pub async fn create_quiz_result_impl(
        &self,
        req: SubmitQuizResultRequest,
    ) -> Result<QuizResult> {
        let now = chrono::Utc::now().timestamp();

        let model = QuizActiveModel {
            enrollment_id: Set(req.enrollment_id),
            module_id: Set(req.module_id),
            score: Set(req.score),
            max_score: Set(req.max_score),
            taken_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("记录测验成绩失败: {e}")))?;

        Ok(result.into_quiz_result())
    }

    /// 分页列出测验成绩（course/user 过滤经由选课记录联表）
    pub async fn list_quiz_results_with_pagination_impl(
        &self,
        query: QuizResultListQuery,
    ) -> Result<QuizResultListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = QuizResults::find();

        if query.course_id.is_some() || query.user_id.is_some() {
            select = select.join(JoinType::InnerJoin, Relation::Enrollment.def());

            if let Some(course_id) = query.course_id {
                select = select.filter(enrollments::Column::CourseId.eq(course_id));
            }

            if let Some(user_id) = query.user_id {
                select = select.filter(enrollments::Column::UserId.eq(user_id));
            }
        }

        select = select.order_by_desc(QuizColumn::TakenAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询成绩总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询成绩页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(QuizResultListResponse {
            items: items.into_iter().map(|m| m.into_quiz_result()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
