//! Database repository layer.
//!
//! Repositories handle CRUD against SeaORM entities and return entity models; conversion
//! into domain models happens in the service layer. All database queries, inserts, updates
//! and deletes go through here.

pub mod drink;
