use super::SeaOrmStorage;
use crate::entity::categories::{ActiveModel, Column, Entity as Categories};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    categories::{
        entities::Category,
        requests::{CategoryListQuery, CreateCategoryRequest, UpdateCategoryRequest},
        responses::CategoryListResponse,
    },
};
use crate::utils::{escape_like_pattern, slug::slug_with_suffix, slugify};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 为分类名生成唯一 slug
    async fn unique_category_slug(&self, name: &str) -> Result<String> {
        let base = slugify(name);
        let taken = Categories::find()
            .filter(Column::Slug.eq(&base))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询分类 slug 失败: {e}")))?;

        Ok(if taken.is_some() {
            slug_with_suffix(&base)
        } else {
            base
        })
    }

    /// 创建分类
    pub async fn create_category_impl(&self, req: CreateCategoryRequest) -> Result<Category> {
        let now = chrono::Utc::now().timestamp();
        let slug = self.unique_category_slug(&req.name).await?;

        let model = ActiveModel {
            name: Set(req.name),
            slug: Set(slug),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建分类失败: {e}")))?;

        Ok(result.into_category())
    }

    pub async fn get_category_by_id_impl(&self, id: i64) -> Result<Option<Category>> {
        let result = Categories::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询分类失败: {e}")))?;

        Ok(result.map(|m| m.into_category()))
    }

    /// 分页列出分类
    pub async fn list_categories_with_pagination_impl(
        &self,
        query: CategoryListQuery,
    ) -> Result<CategoryListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Categories::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Slug.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询分类总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询分类页数失败: {e}")))?;
        let categories = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询分类列表失败: {e}")))?;

        Ok(CategoryListResponse {
            items: categories.into_iter().map(|m| m.into_category()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新分类（改名时重新生成 slug）
    pub async fn update_category_impl(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        let existing = self.get_category_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            let slug = self.unique_category_slug(&name).await?;
            model.name = Set(name);
            model.slug = Set(slug);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新分类失败: {e}")))?;

        self.get_category_by_id_impl(id).await
    }

    pub async fn delete_category_impl(&self, id: i64) -> Result<bool> {
        let result = Categories::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除分类失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
