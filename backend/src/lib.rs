//! Room reservation gateway.
//!
//! Exposes one HTTP surface over three backend services (rooms, guests,
//! reservations): pass-through create/read/update/delete for each, plus the
//! `GET /roomReservations` view joining every room with the reservation and
//! guest holding it.
//!
//! Layout follows a ports-and-adapters split:
//! - [`domain`]: records, errors, ports and the aggregation service.
//! - [`inbound`]: Actix handlers.
//! - [`outbound`]: reqwest adapters for the backend services.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
