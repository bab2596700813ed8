//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `stayhub_db`, apply
//! the business rules from `stayhub_core`, and map errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod booking;
pub mod listing;
pub mod review;
