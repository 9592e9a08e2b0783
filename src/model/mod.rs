//! Wire DTOs shared between the API layer and the routes.
//!
//! All DTOs serialize with camelCase field names to match the REST API.

pub mod api;
pub mod asset;
pub mod server;
pub mod store;
