//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let drink = factory::drink::create_drink(&db).await?;
//!     let mojito = factory::drink::DrinkFactory::new(&db)
//!         .title("Mojito")
//!         .recipe(r#"[{"color":"green","parts":2}]"#)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod drink;
pub mod helpers;
