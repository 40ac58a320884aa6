pub mod create;
pub mod get;
pub mod list;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::orders::requests::{
    CreateOrderRequest, OrderListParams, UpdateOrderStatusRequest,
};
use crate::storage::Storage;

pub struct OrderService {
    storage: Option<Arc<dyn Storage>>,
}

impl OrderService {
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

    pub async fn create_order(
        &self,
        order_data: CreateOrderRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_order(self, order_data, request).await
    }

    pub async fn get_order(
        &self,
        order_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_order(self, order_id, request).await
    }

    pub async fn list_orders(
        &self,
        query: OrderListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_orders(self, query, request).await
    }

    pub async fn update_order_status(
        &self,
        order_id: i64,
        status_data: UpdateOrderStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::update_order_status(self, order_id, status_data, request).await
    }
}
