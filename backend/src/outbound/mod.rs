//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and the backend
//! services' REST contracts. They contain no business logic.

pub mod backend_http;
