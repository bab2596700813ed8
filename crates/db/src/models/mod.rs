//! Entity model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Read-side detail structs where the wire shape joins in display
//!   strings (username, listing title) instead of raw foreign keys

pub mod booking;
pub mod listing;
pub mod review;
pub mod user;
