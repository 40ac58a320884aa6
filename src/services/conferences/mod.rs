pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod register;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::conferences::requests::{
    ConferenceListParams, CreateConferenceRequest, UpdateConferenceRequest,
};
use crate::storage::Storage;

pub struct ConferenceService {
    storage: Option<Arc<dyn Storage>>,
}

impl ConferenceService {
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

    pub async fn list_conferences(
        &self,
        query: ConferenceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_conferences(self, query, request).await
    }

    pub async fn get_conference(
        &self,
        conference_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_conference(self, conference_id, request).await
    }

    pub async fn create_conference(
        &self,
        conference_data: CreateConferenceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_conference(self, conference_data, request).await
    }

    pub async fn update_conference(
        &self,
        conference_id: i64,
        update_data: UpdateConferenceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_conference(self, conference_id, update_data, request).await
    }

    pub async fn delete_conference(
        &self,
        conference_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_conference(self, conference_id, request).await
    }

    // 报名
    pub async fn register(
        &self,
        conference_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::register(self, conference_id, request).await
    }

    // 取消报名
    pub async fn unregister(
        &self,
        conference_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::unregister(self, conference_id, request).await
    }
}
