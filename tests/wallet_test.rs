///! Tests for wallet transaction semantics: which types credit vs debit the
///! balance, and the signed delta the ledger applies.
///!
///! Run with: `cargo test --test wallet_test`
use rust_decimal::Decimal;

use labourmandi_backend::models::transactions::TransactionType;

#[test]
fn test_credit_like_types_increase_the_balance() {
    for t in [
        TransactionType::Credit,
        TransactionType::Deposit,
        TransactionType::Earning,
    ] {
        assert!(t.is_credit(), "{t:?} should be credit-like");
        assert_eq!(t.signed_delta(Decimal::new(25050, 2)), Decimal::new(25050, 2));
    }
}

#[test]
fn test_debit_like_types_decrease_the_balance() {
    for t in [
        TransactionType::Debit,
        TransactionType::Withdrawal,
        TransactionType::Payment,
    ] {
        assert!(!t.is_credit(), "{t:?} should be debit-like");
        assert_eq!(t.signed_delta(Decimal::new(25050, 2)), Decimal::new(-25050, 2));
    }
}

#[test]
fn test_transaction_types_serialize_lowercase() {
    assert_eq!(
        serde_json::to_value(TransactionType::Withdrawal).unwrap(),
        serde_json::json!("withdrawal")
    );
    assert_eq!(
        serde_json::from_value::<TransactionType>(serde_json::json!("earning")).unwrap(),
        TransactionType::Earning
    );
}
