use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MediaService;
use crate::middlewares::RequireJWT;
use crate::models::media::requests::{MediaListParams, MediaListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_files(
    service: &MediaService,
    params: MediaListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(owner_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    let query = MediaListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        owner_id: Some(owner_id),
    };

    match storage.list_media_files_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => {
            error!("Failed to list media files: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list media files: {e}"),
                )),
            )
        }
    }
}
