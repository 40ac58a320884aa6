pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::{QuizResultListParams, SubmitQuizResultRequest};
use crate::storage::Storage;

pub struct QuizResultService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizResultService {
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

    pub async fn submit(
        &self,
        result: SubmitQuizResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_quiz_result(self, result, request).await
    }

    pub async fn list_results(
        &self,
        query: QuizResultListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_quiz_results(self, query, request).await
    }
}
