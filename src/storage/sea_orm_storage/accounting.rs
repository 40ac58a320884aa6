use super::SeaOrmStorage;
use crate::entity::account_entries::{ActiveModel, Column, Entity as AccountEntries};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    accounting::{
        entities::{AccountEntry, EntryDirection},
        requests::{AccountEntryListQuery, CreateAccountEntryRequest},
        responses::{AccountEntryListResponse, JournalResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    Set,
};

impl SeaOrmStorage {
    /// 写入账务分录
    pub async fn create_account_entry_impl(
        &self,
        req: CreateAccountEntryRequest,
    ) -> Result<AccountEntry> {
        let now = chrono::Utc::now().timestamp();
        let entry_date = req.entry_date.map(|d| d.timestamp()).unwrap_or(now);

        let model = ActiveModel {
            account: Set(req.account),
            direction: Set(req.direction.to_string()),
            amount_cents: Set(req.amount_cents),
            reference: Set(req.reference),
            memo: Set(req.memo),
            entry_date: Set(entry_date),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("写入账务分录失败: {e}")))?;

        Ok(result.into_entry())
    }

    fn filtered_entries(query: &AccountEntryListQuery) -> Select<AccountEntries> {
        let mut select = AccountEntries::find();

        if let Some(ref account) = query.account {
            select = select.filter(Column::Account.eq(account.clone()));
        }

        if let Some(ref direction) = query.direction {
            select = select.filter(Column::Direction.eq(direction.to_string()));
        }

        if let Some(from) = query.from {
            select = select.filter(Column::EntryDate.gte(from.timestamp()));
        }

        if let Some(to) = query.to {
            select = select.filter(Column::EntryDate.lte(to.timestamp()));
        }

        select
    }

    pub async fn list_account_entries_with_pagination_impl(
        &self,
        query: AccountEntryListQuery,
    ) -> Result<AccountEntryListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let select = Self::filtered_entries(&query).order_by_desc(Column::EntryDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询分录总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询分录页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询分录列表失败: {e}")))?;

        Ok(AccountEntryListResponse {
            items: items.into_iter().map(|m| m.into_entry()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 流水账视图：按时间升序分页，并对当前筛选范围合计借贷
    pub async fn journal_with_pagination_impl(
        &self,
        query: AccountEntryListQuery,
    ) -> Result<JournalResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let select = Self::filtered_entries(&query).order_by_asc(Column::EntryDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询流水总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询流水页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询流水列表失败: {e}")))?;

        // 借贷合计在筛选范围内计算，不受分页影响
        let all_entries = Self::filtered_entries(&query)
            .all(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("合计借贷失败: {e}")))?;

        let mut total_debit_cents = 0i64;
        let mut total_credit_cents = 0i64;
        for entry in &all_entries {
            match entry.direction.parse::<EntryDirection>() {
                Ok(EntryDirection::Debit) => total_debit_cents += entry.amount_cents,
                Ok(EntryDirection::Credit) => total_credit_cents += entry.amount_cents,
                Err(_) => {}
            }
        }

        Ok(JournalResponse {
            items: items.into_iter().map(|m| m.into_entry()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
            total_debit_cents,
            total_credit_cents,
        })
    }
}
