use super::SeaOrmStorage;
use crate::entity::conference_registrations::{
    ActiveModel as RegistrationActiveModel, Column as RegistrationColumn,
    Entity as ConferenceRegistrations,
};
use crate::entity::conferences::{ActiveModel, Column, Entity as Conferences};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    conferences::{
        entities::{Conference, ConferenceRegistration, ConferenceStatus},
        requests::{ConferenceListQuery, CreateConferenceRequest, UpdateConferenceRequest},
        responses::ConferenceListResponse,
    },
};
use crate::utils::{escape_like_pattern, slug::slug_with_suffix, slugify};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    async fn unique_conference_slug(&self, title: &str) -> Result<String> {
        let base = slugify(title);
        let taken = Conferences::find()
            .filter(Column::Slug.eq(&base))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询会议 slug 失败: {e}")))?;

        Ok(if taken.is_some() {
            slug_with_suffix(&base)
        } else {
            base
        })
    }

    /// 创建会议（初始为公告状态）
    pub async fn create_conference_impl(
        &self,
        req: CreateConferenceRequest,
    ) -> Result<Conference> {
        let now = chrono::Utc::now().timestamp();
        let slug = self.unique_conference_slug(&req.title).await?;

        let model = ActiveModel {
            title: Set(req.title),
            slug: Set(slug),
            description: Set(req.description),
            location: Set(req.location),
            starts_at: Set(req.starts_at.timestamp()),
            ends_at: Set(req.ends_at.timestamp()),
            capacity: Set(req.capacity.max(0)),
            status: Set(ConferenceStatus::Announced.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建会议失败: {e}")))?;

        Ok(result.into_conference())
    }

    pub async fn get_conference_by_id_impl(&self, id: i64) -> Result<Option<Conference>> {
        let result = Conferences::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询会议失败: {e}")))?;

        Ok(result.map(|m| m.into_conference()))
    }

    pub async fn list_conferences_with_pagination_impl(
        &self,
        query: ConferenceListQuery,
    ) -> Result<ConferenceListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Conferences::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Location.contains(&escaped)),
            );
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_asc(Column::StartsAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询会议总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询会议页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询会议列表失败: {e}")))?;

        Ok(ConferenceListResponse {
            items: items.into_iter().map(|m| m.into_conference()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_conference_impl(
        &self,
        id: i64,
        update: UpdateConferenceRequest,
    ) -> Result<Option<Conference>> {
        let existing = self.get_conference_by_id_impl(id).await?;
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
            let slug = self.unique_conference_slug(&title).await?;
            model.title = Set(title);
            model.slug = Set(slug);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(location) = update.location {
            model.location = Set(location);
        }

        if let Some(starts_at) = update.starts_at {
            model.starts_at = Set(starts_at.timestamp());
        }

        if let Some(ends_at) = update.ends_at {
            model.ends_at = Set(ends_at.timestamp());
        }

        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity.max(0));
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新会议失败: {e}")))?;

        self.get_conference_by_id_impl(id).await
    }

    pub async fn delete_conference_impl(&self, id: i64) -> Result<bool> {
        let result = Conferences::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除会议失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_conference_registrations_impl(&self, conference_id: i64) -> Result<u64> {
        let count = ConferenceRegistrations::find()
            .filter(RegistrationColumn::ConferenceId.eq(conference_id))
            .count(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("统计报名人数失败: {e}")))?;

        Ok(count)
    }

    pub async fn create_conference_registration_impl(
        &self,
        conference_id: i64,
        user_id: i64,
    ) -> Result<ConferenceRegistration> {
        let now = chrono::Utc::now().timestamp();

        let model = RegistrationActiveModel {
            conference_id: Set(conference_id),
            user_id: Set(user_id),
            registered_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("会议报名失败: {e}")))?;

        Ok(result.into_registration())
    }

    pub async fn get_registration_by_user_and_conference_impl(
        &self,
        user_id: i64,
        conference_id: i64,
    ) -> Result<Option<ConferenceRegistration>> {
        let result = ConferenceRegistrations::find()
            .filter(RegistrationColumn::UserId.eq(user_id))
            .filter(RegistrationColumn::ConferenceId.eq(conference_id))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询报名记录失败: {e}")))?;

        Ok(result.map(|m| m.into_registration()))
    }

    pub async fn delete_conference_registration_impl(
        &self,
        conference_id: i64,
        user_id: i64,
    ) -> Result<bool> {
        let result = ConferenceRegistrations::delete_many()
            .filter(RegistrationColumn::ConferenceId.eq(conference_id))
            .filter(RegistrationColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("取消报名失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
