///! Tests for the bid status state machine: pending is the only non-terminal
///! state, and every disallowed transition produces a typed error.
///!
///! Run with: `cargo test --test bid_state_test`
use labourmandi_backend::models::bids::BidStatus;

const ALL: [BidStatus; 4] = [
    BidStatus::Pending,
    BidStatus::Accepted,
    BidStatus::Rejected,
    BidStatus::Withdrawn,
];

#[test]
fn test_pending_can_reach_every_terminal_state() {
    assert!(BidStatus::Pending.can_transition_to(BidStatus::Accepted));
    assert!(BidStatus::Pending.can_transition_to(BidStatus::Rejected));
    assert!(BidStatus::Pending.can_transition_to(BidStatus::Withdrawn));
}

#[test]
fn test_pending_cannot_transition_to_itself() {
    assert!(!BidStatus::Pending.can_transition_to(BidStatus::Pending));
}

#[test]
fn test_terminal_states_allow_no_transitions() {
    for from in [BidStatus::Accepted, BidStatus::Rejected, BidStatus::Withdrawn] {
        for to in ALL {
            assert!(
                !from.can_transition_to(to),
                "{from:?} -> {to:?} should be rejected"
            );
        }
    }
}

#[test]
fn test_transition_to_returns_the_new_state_on_success() {
    let next = BidStatus::Pending.transition_to(BidStatus::Accepted).unwrap();
    assert_eq!(next, BidStatus::Accepted);
}

#[test]
fn test_transition_error_names_both_states() {
    let err = BidStatus::Accepted
        .transition_to(BidStatus::Withdrawn)
        .unwrap_err();
    assert_eq!(err.from, BidStatus::Accepted);
    assert_eq!(err.to, BidStatus::Withdrawn);

    let msg = err.to_string();
    assert!(msg.contains("Accepted"));
    assert!(msg.contains("Withdrawn"));
}
