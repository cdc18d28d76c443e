//! Request guards.
//!
//! `auth` verifies bearer tokens and checks the permissions a handler requires.

pub mod auth;
