use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;
use tracing::error;

use super::MediaService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 凭下载 token 读取文件内容
pub async fn handle_download(
    service: &MediaService,
    token: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let file = match storage.get_media_file_by_token(&token).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "File not found",
            )));
        }
        Err(e) => {
            error!("Failed to look up file {}: {}", token, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to look up file: {e}"),
                )),
            );
        }
    };

    let config = AppConfig::get();
    let file_path = Path::new(&config.upload.dir).join(&file.stored_name);

    match std::fs::read(&file_path) {
        Ok(content) => {
            let content_type = if file.file_type.is_empty() {
                "application/octet-stream".to_string()
            } else {
                file.file_type.clone()
            };

            Ok(HttpResponse::Ok()
                .insert_header((CONTENT_TYPE, content_type))
                .insert_header((
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file.original_name),
                ))
                .body(content))
        }
        Err(e) => {
            // 数据库有记录但磁盘文件缺失
            error!("Stored file missing for token {}: {}", token, e);
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "File content is no longer available",
            )))
        }
    }
}
