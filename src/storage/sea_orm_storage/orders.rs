use super::SeaOrmStorage;
use crate::entity::orders::{ActiveModel, Column, Entity as Orders};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    orders::{
        entities::{Order, OrderStatus},
        requests::OrderListQuery,
        responses::OrderListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建订单，金额为下单时的课程价格快照
    pub async fn create_order_impl(
        &self,
        user_id: i64,
        course_id: i64,
        amount_cents: i64,
    ) -> Result<Order> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            amount_cents: Set(amount_cents),
            status: Set(OrderStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建订单失败: {e}")))?;

        Ok(result.into_order())
    }

    pub async fn get_order_by_id_impl(&self, id: i64) -> Result<Option<Order>> {
        let result = Orders::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询订单失败: {e}")))?;

        Ok(result.map(|m| m.into_order()))
    }

    pub async fn list_orders_with_pagination_impl(
        &self,
        query: OrderListQuery,
    ) -> Result<OrderListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Orders::find();

        if let Some(user_id) = query.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询订单总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询订单页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询订单列表失败: {e}")))?;

        Ok(OrderListResponse {
            items: items.into_iter().map(|m| m.into_order()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 订单状态写入；paid 时记录支付时间
    pub async fn update_order_status_impl(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<Option<Order>> {
        let existing = self.get_order_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if status == OrderStatus::Paid {
            model.paid_at = Set(Some(now));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新订单状态失败: {e}")))?;

        self.get_order_by_id_impl(id).await
    }
}
