//! Drinks Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the drinks
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for drink rows, and a minting helper for bearer tokens.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **DrinkFactory**: Inserts drink rows with sensible defaults
//! - **TokenFactory**: Signs HS256 tokens carrying a chosen permission set
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory, token::TokenFactory};
//!
//! #[tokio::test]
//! async fn test_drink_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_drink_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let drink = factory::drink::create_drink(db).await?;
//!     let token = TokenFactory::new().permissions(&["patch:drinks"]).build()?;
//!     // Perform requests...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod token;
