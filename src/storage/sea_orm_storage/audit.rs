use super::SeaOrmStorage;
use crate::entity::audit_logs::{ActiveModel, Column, Entity as AuditLogs};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    audit::{entities::NewAuditLog, requests::AuditLogListQuery, responses::AuditLogListResponse},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 追加审计日志。此表没有更新和删除路径。
    pub async fn append_audit_log_impl(&self, log: NewAuditLog) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            actor_id: Set(log.actor_id),
            action: Set(log.action),
            target_type: Set(log.target_type),
            target_id: Set(log.target_id),
            detail: Set(log.detail),
            created_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("写入审计日志失败: {e}")))?;

        Ok(())
    }

    pub async fn list_audit_logs_with_pagination_impl(
        &self,
        query: AuditLogListQuery,
    ) -> Result<AuditLogListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = AuditLogs::find();

        if let Some(actor_id) = query.actor_id {
            select = select.filter(Column::ActorId.eq(actor_id));
        }

        if let Some(ref action) = query.action {
            select = select.filter(Column::Action.eq(action.clone()));
        }

        if let Some(ref target_type) = query.target_type {
            select = select.filter(Column::TargetType.eq(target_type.clone()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询日志总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询日志页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询日志列表失败: {e}")))?;

        Ok(AuditLogListResponse {
            items: items.into_iter().map(|m| m.into_audit_log()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
