use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use sea_orm::prelude::Decimal;
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::transactions as transaction_db;
use crate::ledger::{self, LedgerError, TransactionMeta};
use crate::models::transactions::{CreateTransactionRequest, TransactionType};
use crate::providers::PaymentProvider;

fn ledger_error_response(e: LedgerError) -> HttpResponse {
    match e {
        LedgerError::NonPositiveAmount(_) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid data",
            "errors": [e.to_string()],
        })),
        LedgerError::UserNotFound(_) => HttpResponse::NotFound().json(serde_json::json!({
            "error": e.to_string(),
        })),
        LedgerError::Db(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/transactions — the user's transaction history, newest first.
pub async fn get_transactions(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match transaction_db::get_transactions_by_user(db.get_ref(), user.0.id).await {
        Ok(transactions) => HttpResponse::Ok().json(transactions),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch transactions: {e}"),
        })),
    }
}

/// POST /api/transactions — record a wallet transaction for the authenticated
/// user and apply it to their balance.
pub async fn create_transaction(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateTransactionRequest>,
) -> impl Responder {
    let input = body.into_inner();

    let meta = TransactionMeta {
        description: input.description,
        reference_id: input.reference_id,
        reference_type: input.reference_type,
    };

    match ledger::apply_transaction(db.get_ref(), user.0.id, input.r#type, input.amount, meta).await
    {
        Ok(transaction) => HttpResponse::Created().json(transaction),
        Err(e) => ledger_error_response(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub amount: Decimal,
}

/// POST /api/payments/create-order — open a gateway order for a wallet
/// deposit. Nothing is credited until the payment is verified.
pub async fn create_order(
    _user: AuthenticatedUser,
    gateway: web::Data<Arc<dyn PaymentProvider>>,
    body: web::Json<CreateOrderRequest>,
) -> impl Responder {
    let amount = body.into_inner().amount;

    if amount <= Decimal::ZERO {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid data",
            "errors": ["amount must be positive"],
        }));
    }

    match gateway.create_order(amount).await {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(e) => HttpResponse::BadGateway().json(serde_json::json!({
            "error": format!("Payment gateway error: {e}"),
        })),
    }
}

#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    pub order_id: String,
    pub payment_id: String,
    pub amount: Decimal,
}

/// POST /api/payments/verify — confirm a completed checkout with the gateway
/// and, on success, credit the deposit to the user's wallet.
pub async fn verify_payment(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    gateway: web::Data<Arc<dyn PaymentProvider>>,
    body: web::Json<VerifyPaymentRequest>,
) -> impl Responder {
    let input = body.into_inner();

    let verified = match gateway
        .verify_payment(&input.order_id, &input.payment_id)
        .await
    {
        Ok(verified) => verified,
        Err(e) => {
            return HttpResponse::BadGateway().json(serde_json::json!({
                "error": format!("Payment gateway error: {e}"),
            }));
        }
    };

    if !verified {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "Payment verification failed",
        }));
    }

    let meta = TransactionMeta {
        description: Some("Wallet deposit".to_string()),
        reference_id: Some(input.payment_id),
        reference_type: Some("payment".to_string()),
    };

    match ledger::apply_transaction(
        db.get_ref(),
        user.0.id,
        TransactionType::Deposit,
        input.amount,
        meta,
    )
    .await
    {
        Ok(transaction) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "transaction": transaction,
        })),
        Err(e) => ledger_error_response(e),
    }
}
