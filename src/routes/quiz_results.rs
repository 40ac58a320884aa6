use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{QuizResultListParams, SubmitQuizResultRequest};
use crate::services::QuizResultService;

static QUIZ_RESULT_SERVICE: Lazy<QuizResultService> = Lazy::new(QuizResultService::new_lazy);

pub async fn submit_quiz_result(
    req: HttpRequest,
    result: web::Json<SubmitQuizResultRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_RESULT_SERVICE.submit(result.into_inner(), &req).await
}

pub async fn list_quiz_results(
    req: HttpRequest,
    query: web::Query<QuizResultListParams>,
) -> ActixResult<HttpResponse> {
    QUIZ_RESULT_SERVICE
        .list_results(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_quiz_result_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quiz-results")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(submit_quiz_result))
            .route("", web::get().to(list_quiz_results)),
    );
}
