pub mod drop;
pub mod enroll;
pub mod list;
pub mod progress;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::{EnrollmentListParams, UpdateProgressRequest};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 报名课程
    pub async fn enroll(&self, course_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        enroll::enroll(self, course_id, request).await
    }

    // 选课列表
    pub async fn list_enrollments(
        &self,
        query: EnrollmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, query, request).await
    }

    // 更新学习进度
    pub async fn update_progress(
        &self,
        enrollment_id: i64,
        update: UpdateProgressRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        progress::update_progress(self, enrollment_id, update, request).await
    }

    // 退课
    pub async fn drop_enrollment(
        &self,
        enrollment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        drop::drop_enrollment(self, enrollment_id, request).await
    }
}
