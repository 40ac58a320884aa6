pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::scholarships::requests::{
    CreateScholarshipRequest, ScholarshipListParams, UpdateScholarshipRequest,
};
use crate::storage::Storage;

pub struct ScholarshipService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScholarshipService {
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

    pub async fn list_scholarships(
        &self,
        query: ScholarshipListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_scholarships(self, query, request).await
    }

    pub async fn get_scholarship(
        &self,
        scholarship_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_scholarship(self, scholarship_id, request).await
    }

    pub async fn create_scholarship(
        &self,
        scholarship_data: CreateScholarshipRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_scholarship(self, scholarship_data, request).await
    }

    pub async fn update_scholarship(
        &self,
        scholarship_id: i64,
        update_data: UpdateScholarshipRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_scholarship(self, scholarship_id, update_data, request).await
    }

    pub async fn delete_scholarship(
        &self,
        scholarship_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_scholarship(self, scholarship_id, request).await
    }
}
