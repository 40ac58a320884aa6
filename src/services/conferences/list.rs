use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ConferenceService;
use crate::models::conferences::requests::{ConferenceListParams, ConferenceListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_conferences(
    service: &ConferenceService,
    params: ConferenceListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ConferenceListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
        status: params.status,
    };

    match storage.list_conferences_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list conferences: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list conferences: {e}"),
                )),
            )
        }
    }
}
