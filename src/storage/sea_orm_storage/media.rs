use super::SeaOrmStorage;
use crate::entity::media_files::{ActiveModel, Column, Entity as MediaFiles};
use crate::errors::{AcademyError, Result};
use crate::models::{
    PaginationInfo,
    media::{entities::MediaFile, requests::MediaListQuery, responses::MediaListResponse},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

impl SeaOrmStorage {
    /// 记录上传文件，生成唯一下载 token
    pub async fn create_media_file_impl(
        &self,
        owner_id: i64,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        file_type: &str,
    ) -> Result<MediaFile> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            owner_id: Set(owner_id),
            original_name: Set(original_name.to_string()),
            stored_name: Set(stored_name.to_string()),
            download_token: Set(Uuid::new_v4().simple().to_string()),
            file_size: Set(file_size),
            file_type: Set(file_type.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("记录上传文件失败: {e}")))?;

        Ok(result.into_media_file())
    }

    pub async fn get_media_file_by_token_impl(&self, token: &str) -> Result<Option<MediaFile>> {
        let result = MediaFiles::find()
            .filter(Column::DownloadToken.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询文件失败: {e}")))?;

        Ok(result.map(|m| m.into_media_file()))
    }

    pub async fn list_media_files_with_pagination_impl(
        &self,
        query: MediaListQuery,
    ) -> Result<MediaListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = MediaFiles::find();

        if let Some(owner_id) = query.owner_id {
            select = select.filter(Column::OwnerId.eq(owner_id));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询文件总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询文件页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AcademyError::database_operation(format!("查询文件列表失败: {e}")))?;

        Ok(MediaListResponse {
            items: items.into_iter().map(|m| m.into_media_file()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
