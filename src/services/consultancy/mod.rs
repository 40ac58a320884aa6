pub mod create;
pub mod list;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::consultancy::requests::{
    ConsultancyListParams, CreateConsultancyRequest, UpdateConsultancyStatusRequest,
};
use crate::storage::Storage;

pub struct ConsultancyService {
    storage: Option<Arc<dyn Storage>>,
}

impl ConsultancyService {
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

    // 提交咨询请求（可匿名）
    pub async fn create_request(
        &self,
        request_data: CreateConsultancyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_request(self, request_data, request).await
    }

    // 咨询请求列表（管理员）
    pub async fn list_requests(
        &self,
        query: ConsultancyListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_requests(self, query, request).await
    }

    // 更新处理状态（管理员）
    pub async fn update_status(
        &self,
        request_id: i64,
        status_data: UpdateConsultancyStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::update_status(self, request_id, status_data, request).await
    }
}
