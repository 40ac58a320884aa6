pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::blogs::requests::{
    BlogListParams, CreateBlogPostRequest, UpdateBlogPostRequest,
};
use crate::storage::Storage;

pub struct BlogService {
    storage: Option<Arc<dyn Storage>>,
}

impl BlogService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_posts(
        &self,
        query: BlogListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_posts(self, query, request).await
    }

    pub async fn get_post(
        &self,
        slug: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_post(self, slug, request).await
    }

    pub async fn create_post(
        &self,
        post_data: CreateBlogPostRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_post(self, post_data, request).await
    }

    pub async fn update_post(
        &self,
        post_id: i64,
        update_data: UpdateBlogPostRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_post(self, post_id, update_data, request).await
    }

    pub async fn delete_post(
        &self,
        post_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_post(self, post_id, request).await
    }
}
