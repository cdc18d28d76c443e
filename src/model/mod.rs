pub mod api;
pub mod drink;
