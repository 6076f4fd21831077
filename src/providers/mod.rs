// Providers layer - Work performers and business logic
//
// Providers contain composable operations that services coordinate.
// The failure policy is a provider so the only randomness in the system
// sits behind an injectable seam.

pub mod failure_policy;
pub mod trust_score_provider;

// Re-export providers for clean imports
pub use failure_policy::{FailurePolicy, FixedOutcomePolicy, RandomFailurePolicy};
pub use trust_score_provider::TrustScoreProvider;
