pub mod download;
pub mod list;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::media::requests::MediaListParams;
use crate::storage::Storage;

pub struct MediaService {
    storage: Option<Arc<dyn Storage>>,
}

impl MediaService {
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

    // 上传文件
    pub async fn upload(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(self, request, payload).await
    }

    // 凭 token 下载文件
    pub async fn download(&self, token: String, request: &HttpRequest) -> ActixResult<HttpResponse> {
        download::handle_download(self, token, request).await
    }

    // 当前用户上传列表
    pub async fn list_files(
        &self,
        query: MediaListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_files(self, query, request).await
    }
}
