pub mod issue;
pub mod list;
pub mod revoke;
pub mod verify;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::certificates::requests::{CertificateListParams, IssueCertificateRequest};
use crate::storage::Storage;

pub struct CertificateService {
    storage: Option<Arc<dyn Storage>>,
}

impl CertificateService {
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

    // 签发证书
    pub async fn issue_certificate(
        &self,
        issue_request: IssueCertificateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        issue::issue_certificate(self, issue_request, request).await
    }

    // 证书列表
    pub async fn list_certificates(
        &self,
        query: CertificateListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_certificates(self, query, request).await
    }

    // 按序列号公开校验
    pub async fn verify_certificate(
        &self,
        serial: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        verify::verify_certificate(self, serial, request).await
    }

    // 吊销证书
    pub async fn revoke_certificate(
        &self,
        certificate_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        revoke::revoke_certificate(self, certificate_id, request).await
    }
}
