use super::SeaOrmStorage;
use crate::entity::consultancy_requests::{ActiveModel, Column, Entity as ConsultancyRequests};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    consultancy::{
        entities::{ConsultancyRequest, ConsultancyStatus},
        requests::{ConsultancyListQuery, CreateConsultancyRequest},
        responses::ConsultancyListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建咨询请求；登录用户提交时关联 user_id
    pub async fn create_consultancy_request_impl(
        &self,
        user_id: Option<i64>,
        req: CreateConsultancyRequest,
    ) -> Result<ConsultancyRequest> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            name: Set(req.name),
            email: Set(req.email),
            subject: Set(req.subject),
            message: Set(req.message),
            status: Set(ConsultancyStatus::New.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建咨询请求失败: {e}")))?;

        Ok(result.into_request())
    }

    pub async fn get_consultancy_request_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<ConsultancyRequest>> {
        let result = ConsultancyRequests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询咨询请求失败: {e}")))?;

        Ok(result.map(|m| m.into_request()))
    }

    pub async fn list_consultancy_requests_with_pagination_impl(
        &self,
        query: ConsultancyListQuery,
    ) -> Result<ConsultancyListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ConsultancyRequests::find();

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 按关联用户过滤
        if let Some(user_id) = query.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询咨询总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询咨询页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询咨询列表失败: {e}")))?;

        Ok(ConsultancyListResponse {
            items: items.into_iter().map(|m| m.into_request()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_consultancy_status_impl(
        &self,
        id: i64,
        status: ConsultancyStatus,
    ) -> Result<Option<ConsultancyRequest>> {
        let existing = self.get_consultancy_request_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新咨询状态失败: {e}")))?;

        self.get_consultancy_request_by_id_impl(id).await
    }
}
