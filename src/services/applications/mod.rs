pub mod apply;
pub mod list;
pub mod review;
pub mod withdraw;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::scholarships::requests::{
    ApplicationListParams, ApplyScholarshipRequest, ReviewApplicationRequest,
};
use crate::storage::Storage;

pub struct ApplicationService {
    storage: Option<Arc<dyn Storage>>,
}

impl ApplicationService {
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

    // 提交申请
    pub async fn apply(
        &self,
        scholarship_id: i64,
        apply_request: ApplyScholarshipRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        apply::apply(self, scholarship_id, apply_request, request).await
    }

    // 申请列表
    pub async fn list_applications(
        &self,
        query: ApplicationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_applications(self, query, request).await
    }

    // 审核申请
    pub async fn review_application(
        &self,
        application_id: i64,
        review_request: ReviewApplicationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        review::review_application(self, application_id, review_request, request).await
    }

    // 撤回申请
    pub async fn withdraw_application(
        &self,
        application_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        withdraw::withdraw_application(self, application_id, request).await
    }
}
