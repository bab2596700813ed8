pub mod auth;
pub mod booking;
pub mod health;
pub mod listing;
pub mod review;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register               register (public)
/// /auth/login                  login (public)
///
/// /listings                    list (public), create (auth)
/// /listings/{id}               get (public), update + delete (auth)
///
/// /bookings                    list (public), create (auth)
/// /bookings/{id}               get (public)
///
/// /reviews                     list (public), create (auth)
/// /reviews/{id}                get (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/listings", listing::router())
        .nest("/bookings", booking::router())
        .nest("/reviews", review::router())
}
