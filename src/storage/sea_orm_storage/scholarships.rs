use super::SeaOrmStorage;
use crate::entity::scholarship_applications::{
    ActiveModel as ApplicationActiveModel, Column as ApplicationColumn,
    Entity as ScholarshipApplications,
};
use crate::entity::scholarships::{ActiveModel, Column, Entity as Scholarships};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    scholarships::{
        entities::{ApplicationStatus, Scholarship, ScholarshipApplication, ScholarshipStatus},
        requests::{
            ApplicationListQuery, CreateScholarshipRequest, ScholarshipListQuery,
            UpdateScholarshipRequest,
        },
        responses::{ApplicationListResponse, ScholarshipListResponse},
    },
};
use crate::utils::{escape_like_pattern, slug::slug_with_suffix, slugify};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    async fn unique_scholarship_slug(&self, title: &str) -> Result<String> {
        let base = slugify(title);
        let taken = Scholarships::find()
            .filter(Column::Slug.eq(&base))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询奖学金 slug 失败: {e}")))?;

        Ok(if taken.is_some() {
            slug_with_suffix(&base)
        } else {
            base
        })
    }

    /// 创建奖学金（初始为开放状态）
    pub async fn create_scholarship_impl(
        &self,
        req: CreateScholarshipRequest,
    ) -> Result<Scholarship> {
        let now = chrono::Utc::now().timestamp();
        let slug = self.unique_scholarship_slug(&req.title).await?;

        let model = ActiveModel {
            title: Set(req.title),
            slug: Set(slug),
            description: Set(req.description),
            amount_cents: Set(req.amount_cents),
            deadline: Set(req.deadline.timestamp()),
            status: Set(ScholarshipStatus::Open.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建奖学金失败: {e}")))?;

        Ok(result.into_scholarship())
    }

    pub async fn get_scholarship_by_id_impl(&self, id: i64) -> Result<Option<Scholarship>> {
        let result = Scholarships::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询奖学金失败: {e}")))?;

        Ok(result.map(|m| m.into_scholarship()))
    }

    pub async fn list_scholarships_with_pagination_impl(
        &self,
        query: ScholarshipListQuery,
    ) -> Result<ScholarshipListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Scholarships::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Slug.contains(&escaped)),
            );
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::Deadline);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询奖学金总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询奖学金页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询奖学金列表失败: {e}")))?;

        Ok(ScholarshipListResponse {
            items: items.into_iter().map(|m| m.into_scholarship()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_scholarship_impl(
        &self,
        id: i64,
        update: UpdateScholarshipRequest,
    ) -> Result<Option<Scholarship>> {
        let existing = self.get_scholarship_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            let slug = self.unique_scholarship_slug(&title).await?;
            model.title = Set(title);
            model.slug = Set(slug);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(amount_cents) = update.amount_cents {
            model.amount_cents = Set(amount_cents);
        }

        if let Some(deadline) = update.deadline {
            model.deadline = Set(deadline.timestamp());
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新奖学金失败: {e}")))?;

        self.get_scholarship_by_id_impl(id).await
    }

    pub async fn delete_scholarship_impl(&self, id: i64) -> Result<bool> {
        let result = Scholarships::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除奖学金失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 提交申请（初始为 pending）
    pub async fn create_application_impl(
        &self,
        scholarship_id: i64,
        user_id: i64,
        motivation: String,
    ) -> Result<ScholarshipApplication> {
        let now = chrono::Utc::now().timestamp();

        let model = ApplicationActiveModel {
            scholarship_id: Set(scholarship_id),
            user_id: Set(user_id),
            motivation: Set(motivation),
            status: Set(ApplicationStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("提交申请失败: {e}")))?;

        Ok(result.into_application())
    }

    pub async fn get_application_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<ScholarshipApplication>> {
        let result = ScholarshipApplications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询申请失败: {e}")))?;

        Ok(result.map(|m| m.into_application()))
    }

    pub async fn get_application_by_user_and_scholarship_impl(
        &self,
        user_id: i64,
        scholarship_id: i64,
    ) -> Result<Option<ScholarshipApplication>> {
        let result = ScholarshipApplications::find()
            .filter(ApplicationColumn::UserId.eq(user_id))
            .filter(ApplicationColumn::ScholarshipId.eq(scholarship_id))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询申请失败: {e}")))?;

        Ok(result.map(|m| m.into_application()))
    }

    pub async fn list_applications_with_pagination_impl(
        &self,
        query: ApplicationListQuery,
    ) -> Result<ApplicationListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ScholarshipApplications::find();

        if let Some(scholarship_id) = query.scholarship_id {
            select = select.filter(ApplicationColumn::ScholarshipId.eq(scholarship_id));
        }

        if let Some(user_id) = query.user_id {
            select = select.filter(ApplicationColumn::UserId.eq(user_id));
        }

        if let Some(ref status) = query.status {
            select = select.filter(ApplicationColumn::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(ApplicationColumn::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询申请总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询申请页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询申请列表失败: {e}")))?;

        Ok(ApplicationListResponse {
            items: items.into_iter().map(|m| m.into_application()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 审核申请：写入结论、审核人与决定时间
    pub async fn review_application_impl(
        &self,
        id: i64,
        decision: ApplicationStatus,
        reviewer_id: i64,
    ) -> Result<Option<ScholarshipApplication>> {
        let existing = self.get_application_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ApplicationActiveModel {
            id: Set(id),
            status: Set(decision.to_string()),
            reviewer_id: Set(Some(reviewer_id)),
            decided_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("审核申请失败: {e}")))?;

        self.get_application_by_id_impl(id).await
    }

    /// 撤回申请：状态置为 withdrawn
    pub async fn withdraw_application_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = ScholarshipApplications::update_many()
            .col_expr(
                ApplicationColumn::Status,
                sea_orm::sea_query::Expr::value(ApplicationStatus::Withdrawn.to_string()),
            )
            .col_expr(
                ApplicationColumn::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(ApplicationColumn::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("撤回申请失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
