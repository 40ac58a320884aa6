use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ConferenceService;
use crate::middlewares::RequireJWT;
use crate::models::conferences::entities::ConferenceStatus;
use crate::models::conferences::responses::RegistrationResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 会议报名：开放状态、未满员、未重复报名
pub async fn register(
    service: &ConferenceService,
    conference_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    let conference = match storage.get_conference_by_id(conference_id).await {
        Ok(Some(conference)) => conference,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ConferenceNotFound,
                "Conference not found",
            )));
        }
        Err(e) => {
            error!("Failed to get conference {}: {}", conference_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get conference: {e}"),
                )),
            );
        }
    };

    if conference.status != ConferenceStatus::Open {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ConferenceClosed,
            "Conference is not open for registration",
        )));
    }

    // 容量检查；capacity 为 0 表示不限
    if conference.capacity > 0 {
        match storage.count_conference_registrations(conference_id).await {
            Ok(count) if count >= conference.capacity as u64 => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ConferenceFull,
                    "Conference is full",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to count registrations: {}", e);
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to count registrations: {e}"),
                    ),
                ));
            }
        }
    }

    match storage
        .get_registration_by_user_and_conference(user_id, conference_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyRegistered,
                "Already registered for this conference",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check registration: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check registration: {e}"),
                )),
            );
        }
    }

    match storage
        .create_conference_registration(conference_id, user_id)
        .await
    {
        Ok(registration) => {
            info!(
                "User {} registered for conference {}",
                user_id, conference_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                RegistrationResponse { registration },
                "报名成功",
            )))
        }
        Err(e) => {
            let msg = format!("Registration failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyRegistered,
                    "Already registered for this conference",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

/// 取消报名
pub async fn unregister(
    service: &ConferenceService,
    conference_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage
        .delete_conference_registration(conference_id, user_id)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("已取消报名"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RegistrationNotFound,
            "Registration not found",
        ))),
        Err(e) => {
            error!("Failed to unregister: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to unregister: {e}"),
                )),
            )
        }
    }
}
