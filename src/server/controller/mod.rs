//! HTTP request handlers.
//!
//! Each handler authenticates the request through `AuthGuard` where required, converts
//! the request DTO into service parameters, calls a service, and converts the domain
//! result back into a response DTO.

pub mod admin;
pub mod auth;
pub mod health;
pub mod menu;
pub mod order;
pub mod review;
