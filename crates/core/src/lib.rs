//! Domain logic for the stayhub listing/booking/review API.
//!
//! This crate is pure: shared identifier/timestamp types, the domain error
//! taxonomy, and the handful of business rules (rating bounds, rating
//! labels, average-rating rounding, booking date ordering, listing field
//! limits) that the HTTP
//! and persistence layers build on. No I/O lives here.

pub mod booking;
pub mod error;
pub mod listing;
pub mod review;
pub mod types;
