use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::users::requests::{UpdateProfileRequest, UpdateUserRequest};
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

use super::AuthService;

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user }, "OK")))
        }
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))),
    }
}

/// 更新当前登录用户的资料；角色与状态不可自助修改
pub async fn handle_update_profile(
    service: &AuthService,
    update: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    // 密码修改走同样的强度校验
    let password_hash = match update.password {
        Some(ref password) => {
            if let Err(msg) = validate_password_simple(password) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
            }
            match hash_password(password) {
                Ok(hash) => Some(hash),
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Password hashing failed: {e}"),
                        ),
                    ));
                }
            }
        }
        None => None,
    };

    let storage = service.get_storage(request);

    let user_update = UpdateUserRequest {
        email: None,
        password: password_hash,
        role: None,
        status: None,
        display_name: update.display_name,
        avatar_url: update.avatar_url,
    };

    match storage.update_user(user_id, user_update).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(UserResponse { user }, "资料更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            error!("Profile update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserUpdateFailed,
                    format!("Profile update failed: {e}"),
                )),
            )
        }
    }
}
