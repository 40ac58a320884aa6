pub mod create_entry;
pub mod journal;
pub mod list_entries;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::accounting::requests::{AccountEntryListParams, CreateAccountEntryRequest};
use crate::storage::Storage;

pub struct AccountingService {
    storage: Option<Arc<dyn Storage>>,
}

impl AccountingService {
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

    // 手工记账
    pub async fn create_entry(
        &self,
        entry_data: CreateAccountEntryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create_entry::create_entry(self, entry_data, request).await
    }

    // 分录列表
    pub async fn list_entries(
        &self,
        query: AccountEntryListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list_entries::list_entries(self, query, request).await
    }

    // 流水账视图
    pub async fn journal(
        &self,
        query: AccountEntryListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        journal::journal(self, query, request).await
    }
}
