use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::OrderService;
use crate::middlewares::RequireJWT;
use crate::models::accounting::entities::EntryDirection;
use crate::models::accounting::requests::CreateAccountEntryRequest;
use crate::models::audit::entities::NewAuditLog;
use crate::models::orders::entities::{Order, OrderStatus};
use crate::models::orders::requests::UpdateOrderStatusRequest;
use crate::models::orders::responses::OrderResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use std::sync::Arc;

/// 订单状态流转：pending -> paid / cancelled。
/// 支付成功时写入一对借贷分录。
pub async fn update_order_status(
    service: &OrderService,
    order_id: i64,
    status_data: UpdateOrderStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if status_data.status == OrderStatus::Pending {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::OrderStatusInvalid,
            "Order cannot be reset to pending",
        )));
    }

    let storage = service.get_storage(request);

    // 只有待支付订单可流转
    match storage.get_order_by_id(order_id).await {
        Ok(Some(order)) => {
            if order.status != OrderStatus::Pending {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::OrderStatusInvalid,
                    "Order has already been settled",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::OrderNotFound,
                "Order not found",
            )));
        }
        Err(e) => {
            error!("Failed to get order {}: {}", order_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get order: {e}"),
                )),
            );
        }
    }

    match storage.update_order_status(order_id, status_data.status).await {
        Ok(Some(order)) => {
            info!("Order {} set to {}", order_id, order.status);

            if order.status == OrderStatus::Paid {
                record_payment_entries(&storage, &order).await;
            }

            if let Some(actor_id) = RequireJWT::extract_user_id(request) {
                let _ = storage
                    .append_audit_log(
                        NewAuditLog::new(actor_id, "order.status", "order", order_id)
                            .with_detail(order.status.to_string()),
                    )
                    .await;
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(OrderResponse { order }, "订单状态已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::OrderNotFound,
            "Order not found",
        ))),
        Err(e) => {
            error!("Failed to update order status: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update order status: {e}"),
                )),
            )
        }
    }
}

/// 支付成功后记账：现金科目借记，课程收入科目贷记
async fn record_payment_entries(storage: &Arc<dyn Storage>, order: &Order) {
    let reference = format!("order:{}", order.id);

    let debit = CreateAccountEntryRequest {
        account: "cash".to_string(),
        direction: EntryDirection::Debit,
        amount_cents: order.amount_cents,
        reference: Some(reference.clone()),
        memo: Some(format!("Course purchase, order {}", order.id)),
        entry_date: None,
    };

    let credit = CreateAccountEntryRequest {
        account: "course_revenue".to_string(),
        direction: EntryDirection::Credit,
        amount_cents: order.amount_cents,
        reference: Some(reference),
        memo: Some(format!("Course purchase, order {}", order.id)),
        entry_date: None,
    };

    // 记账失败不回滚订单，只记录日志待人工对账
    if let Err(e) = storage.create_account_entry(debit).await {
        error!("Failed to record debit entry for order {}: {}", order.id, e);
    }
    if let Err(e) = storage.create_account_entry(credit).await {
        error!("Failed to record credit entry for order {}: {}", order.id, e);
    }
}
