use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use super::ProviderError;

/// An order created with the payment gateway, handed to the client so it can
/// drive the gateway's checkout flow.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentOrder {
    pub id: String,
    /// Amount in the currency's minor unit (paise).
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    pub status: String,
}

/// Payment gateway integration behind a trait so the wallet flow is testable
/// without live network calls.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_order(&self, amount: Decimal) -> Result<PaymentOrder, ProviderError>;

    /// Verify a completed checkout. True means the payment cleared and the
    /// caller may record the matching ledger transaction.
    async fn verify_payment(&self, order_id: &str, payment_id: &str)
    -> Result<bool, ProviderError>;
}

/// Stand-in gateway used until the real integration lands: orders are minted
/// locally and verification always succeeds.
pub struct MockGateway;

#[async_trait]
impl PaymentProvider for MockGateway {
    async fn create_order(&self, amount: Decimal) -> Result<PaymentOrder, ProviderError> {
        let ts = chrono::Utc::now().timestamp_millis();
        // Gateways quote INR in paise.
        let paise = (amount * Decimal::from(100))
            .trunc()
            .to_i64()
            .ok_or_else(|| ProviderError::BadResponse(format!("amount out of range: {amount}")))?;

        Ok(PaymentOrder {
            id: format!("order_{ts}"),
            amount: paise,
            currency: "INR".to_string(),
            receipt: format!("receipt_{ts}"),
            status: "created".to_string(),
        })
    }

    async fn verify_payment(
        &self,
        _order_id: &str,
        _payment_id: &str,
    ) -> Result<bool, ProviderError> {
        Ok(true)
    }
}
