///! Tests for the stand-in payment gateway: minor-unit conversion and order
///! shape. No network is involved.
///!
///! Run with: `cargo test --test payments_test`
use rust_decimal::Decimal;

use labourmandi_backend::providers::{MockGateway, PaymentProvider};

#[tokio::test]
async fn test_create_order_quotes_amount_in_paise() {
    let order = MockGateway
        .create_order(Decimal::new(49999, 2)) // ₹499.99
        .await
        .unwrap();

    assert_eq!(order.amount, 49999);
    assert_eq!(order.currency, "INR");
    assert_eq!(order.status, "created");
    assert!(order.id.starts_with("order_"));
}

#[tokio::test]
async fn test_sub_paise_precision_is_truncated() {
    let order = MockGateway
        .create_order(Decimal::new(100999, 3)) // ₹100.999
        .await
        .unwrap();

    assert_eq!(order.amount, 10099);
}

#[tokio::test]
async fn test_mock_verification_always_clears() {
    let verified = MockGateway
        .verify_payment("order_123", "pay_456")
        .await
        .unwrap();
    assert!(verified);
}
