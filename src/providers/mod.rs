pub mod matching;
pub mod payments;

pub use matching::{MatchingProvider, OpenAiMatching};
pub use payments::{MockGateway, PaymentOrder, PaymentProvider};

/// Failure talking to an external provider. Handlers surface these as 502
/// so callers can tell an upstream outage from an internal fault.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected provider response: {0}")]
    BadResponse(String),
}
