use super::SeaOrmStorage;
use crate::entity::blog_posts::{ActiveModel, Column, Entity as BlogPosts};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    blogs::{
        entities::{BlogPost, BlogStatus},
        requests::{BlogListQuery, CreateBlogPostRequest, UpdateBlogPostRequest},
        responses::BlogListResponse,
    },
};
use crate::utils::{escape_like_pattern, slug::slug_with_suffix, slugify};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    async fn unique_blog_slug(&self, title: &str) -> Result<String> {
        let base = slugify(title);
        let taken = BlogPosts::find()
            .filter(Column::Slug.eq(&base))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询文章 slug 失败: {e}")))?;

        Ok(if taken.is_some() {
            slug_with_suffix(&base)
        } else {
            base
        })
    }

    /// 创建文章；发布状态下记录发布时间
    pub async fn create_blog_post_impl(
        &self,
        author_id: i64,
        req: CreateBlogPostRequest,
    ) -> Result<BlogPost> {
        let now = chrono::Utc::now().timestamp();
        let slug = self.unique_blog_slug(&req.title).await?;

        let published_at = match req.status {
            BlogStatus::Published => Some(now),
            BlogStatus::Draft => None,
        };

        let model = ActiveModel {
            author_id: Set(author_id),
            category_id: Set(req.category_id),
            title: Set(req.title),
            slug: Set(slug),
            body: Set(req.body),
            status: Set(req.status.to_string()),
            published_at: Set(published_at),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("创建文章失败: {e}")))?;

        Ok(result.into_blog_post())
    }

    pub async fn get_blog_post_by_id_impl(&self, id: i64) -> Result<Option<BlogPost>> {
        let result = BlogPosts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询文章失败: {e}")))?;

        Ok(result.map(|m| m.into_blog_post()))
    }

    pub async fn get_blog_post_by_slug_impl(&self, slug: &str) -> Result<Option<BlogPost>> {
        let result = BlogPosts::find()
            .filter(Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询文章失败: {e}")))?;

        Ok(result.map(|m| m.into_blog_post()))
    }

    pub async fn list_blog_posts_with_pagination_impl(
        &self,
        query: BlogListQuery,
    ) -> Result<BlogListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = BlogPosts::find();

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

        if let Some(category_id) = query.category_id {
            select = select.filter(Column::CategoryId.eq(category_id));
        }

        if let Some(author_id) = query.author_id {
            select = select.filter(Column::AuthorId.eq(author_id));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询文章总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询文章页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询文章列表失败: {e}")))?;

        Ok(BlogListResponse {
            items: items.into_iter().map(|m| m.into_blog_post()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新文章；首次转为发布状态时记录发布时间
    pub async fn update_blog_post_impl(
        &self,
        id: i64,
        update: UpdateBlogPostRequest,
    ) -> Result<Option<BlogPost>> {
        let Some(existing) = self.get_blog_post_by_id_impl(id).await? else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            let slug = self.unique_blog_slug(&title).await?;
            model.title = Set(title);
            model.slug = Set(slug);
        }

        if let Some(body) = update.body {
            model.body = Set(body);
        }

        if let Some(category_id) = update.category_id {
            model.category_id = Set(Some(category_id));
        }

        if let Some(status) = update.status {
            if status == BlogStatus::Published && existing.published_at.is_none() {
                model.published_at = Set(Some(now));
            }
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("更新文章失败: {e}")))?;

        self.get_blog_post_by_id_impl(id).await
    }

    pub async fn delete_blog_post_impl(&self, id: i64) -> Result<bool> {
        let result = BlogPosts::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("删除文章失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
