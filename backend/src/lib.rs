//! Movie catalogue backend library.
//!
//! Hexagonal layout:
//! - [`domain`]: movie record, validation, ports and the catalogue service.
//! - [`inbound::http`]: Actix handlers and error mapping.
//! - [`outbound::persistence`]: Diesel/PostgreSQL adapter and migrations.
//! - [`server`]: application assembly shared by the binaries and tests.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
