//! HTTP API.
//!
//! Exposes the patient/appointment operations as REST endpoints for the
//! web front end. Routes are nested under `/api/`; the router is
//! composable — `api_router()` returns a `Router` that can be mounted on
//! any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer};
pub use types::ApiContext;
