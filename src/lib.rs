//! Kodiak webhook ingestion - schema-validated decoding of GitHub webhook events.
//!
//! This library receives raw webhook payloads plus their event-type tag,
//! validates only the fields the automation logic actually requires, and
//! produces strongly-typed [`events::DecodedEvent`] values (or precise,
//! inspectable decode errors).

pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod events;
pub mod registry;
pub mod server;
pub mod signature;
pub mod types;
