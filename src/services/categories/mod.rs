pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::categories::requests::{
    CategoryListParams, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::storage::Storage;

pub struct CategoryService {
    storage: Option<Arc<dyn Storage>>,
}

impl CategoryService {
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

    pub async fn list_categories(
        &self,
        query: CategoryListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_categories(self, query, request).await
    }

    pub async fn create_category(
        &self,
        category_data: CreateCategoryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_category(self, category_data, request).await
    }

    pub async fn update_category(
        &self,
        category_id: i64,
        update_data: UpdateCategoryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_category(self, category_id, update_data, request).await
    }

    pub async fn delete_category(
        &self,
        category_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_category(self, category_id, request).await
    }
}
