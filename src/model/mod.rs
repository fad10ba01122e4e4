//! Request and response DTOs for the HTTP API.
//!
//! These types define the JSON (and form) contract of the service. They carry serde and
//! OpenAPI schema derives and nothing else; conversion to and from server domain models
//! happens in `server::model`.

pub mod admin;
pub mod api;
pub mod menu;
pub mod order;
pub mod review;
pub mod user;
