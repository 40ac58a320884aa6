//! 路径参数安全提取器
//!
//! 将路径参数解析失败统一转换为带业务错误码的 400 JSON 响应，
//! 避免在每个处理程序里重复解析与校验。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(message.to_string(), response).into()
}

/// 定义 i64 路径参数提取器的宏
macro_rules! define_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(bad_request(concat!(
                        "Invalid path parameter: ",
                        $param
                    ))),
                })
            }
        }
    };
}

define_i64_extractor!(SafeIDI64, "id");
define_i64_extractor!(SafeCourseIdI64, "course_id");
define_i64_extractor!(SafeEnrollmentIdI64, "enrollment_id");
define_i64_extractor!(SafeConferenceIdI64, "conference_id");
define_i64_extractor!(SafeProjectIdI64, "project_id");
define_i64_extractor!(SafeTaskIdI64, "task_id");
define_i64_extractor!(SafeApplicationIdI64, "application_id");
define_i64_extractor!(SafeScholarshipIdI64, "scholarship_id");

/// 定义字符串路径参数提取器的宏（限制字符集与长度）
macro_rules! define_str_extractor {
    ($name:ident, $param:literal, $max_len:literal) => {
        pub struct $name(pub String);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let value = req.match_info().get($param).unwrap_or_default();
                let valid = !value.is_empty()
                    && value.len() <= $max_len
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

                ready(if valid {
                    Ok($name(value.to_string()))
                } else {
                    Err(bad_request(concat!("Invalid path parameter: ", $param)))
                })
            }
        }
    };
}

define_str_extractor!(SafeSlug, "slug", 200);
define_str_extractor!(SafeCertificateSerial, "serial", 32);
define_str_extractor!(SafeMediaToken, "token", 64);

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_id_extractor_accepts_positive_integers() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        let result = SafeIDI64::from_request(&req, &mut actix_web::dev::Payload::None).await;
        assert_eq!(result.unwrap().0, 42);
    }

    #[actix_web::test]
    async fn test_id_extractor_rejects_garbage() {
        for raw in ["abc", "-1", "0", "9999999999999999999999"] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            let result = SafeIDI64::from_request(&req, &mut actix_web::dev::Payload::None).await;
            assert!(result.is_err(), "expected rejection for {raw:?}");
        }
    }

    #[actix_web::test]
    async fn test_slug_extractor_charset() {
        let req = TestRequest::default()
            .param("slug", "intro-to-rust_2026")
            .to_http_request();
        let result = SafeSlug::from_request(&req, &mut actix_web::dev::Payload::None).await;
        assert_eq!(result.unwrap().0, "intro-to-rust_2026");

        let req = TestRequest::default()
            .param("slug", "has/slash")
            .to_http_request();
        let result = SafeSlug::from_request(&req, &mut actix_web::dev::Payload::None).await;
        assert!(result.is_err());
    }
}
