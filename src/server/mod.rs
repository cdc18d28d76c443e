//! HTTP backend for the drink menu.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! `jsonwebtoken` for bearer token verification.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Drink orchestration and token verification
//! - **Data Layer** (`data/`) - Database operations against the drink table
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authorization guard and permissions
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token verifier)
//! - **Startup** (`startup`) - Logging, database, signing keys and the listener
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** checks the bearer token through the auth guard, then extracts the
//!    path and body and converts DTOs to params
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database, returns entity models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
