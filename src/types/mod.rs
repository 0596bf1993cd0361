//! Core domain types for webhook ingestion.
//!
//! Deliberately absent: a shared `Repository` type. Each event kind in
//! [`crate::events`] declares its own repository shape, because the set of
//! guaranteed-present repository fields differs across webhook event types.

pub mod ids;

// Re-export commonly used types at the module level
pub use ids::{CheckSuiteId, CommentId, DeliveryId, InvalidSha, PrNumber, Sha};
