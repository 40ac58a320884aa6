use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::media::requests::MediaListParams;
use crate::services::MediaService;
use crate::utils::SafeMediaToken;

static MEDIA_SERVICE: Lazy<MediaService> = Lazy::new(MediaService::new_lazy);

pub async fn upload(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE.upload(&req, payload).await
}

pub async fn download(req: HttpRequest, token: SafeMediaToken) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE.download(token.0, &req).await
}

pub async fn list_files(
    req: HttpRequest,
    query: web::Query<MediaListParams>,
) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE.list_files(query.into_inner(), &req).await
}

// 配置路由：下载凭 token 公开，上传与列表需登录
pub fn configure_media_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/media")
            .service(
                web::resource("/{token}")
                    .guard(guard::Get())
                    .route(web::get().to(download)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("", web::get().to(list_files))
                    .service(
                        web::scope("/upload")
                            .wrap(RateLimit::file_upload())
                            .route("", web::post().to(upload)),
                    ),
            ),
    );
}
