//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step writes in a single transaction

pub mod auth;
pub mod inventory;
pub mod menu;
pub mod order;
pub mod password;
pub mod purchase_request;
pub mod report;
pub mod review;
pub mod token;
