//! Registration routes

use std::sync::Arc;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::core::middleware::basic_auth_middleware;
use crate::features::registration::handlers;
use crate::features::registration::services::RegistrationService;

/// Create routes for the registration feature
///
/// `POST /submit` is public. `GET /users/all` requires HTTP Basic auth when
/// `admin_credentials` ("username:password") is set, and is open otherwise.
pub fn routes(service: Arc<RegistrationService>, admin_credentials: Option<String>) -> Router {
    let listing = Router::new().route("/users/all", get(handlers::list_registrations));

    let listing = match admin_credentials {
        Some(credentials) => listing.route_layer(from_fn(basic_auth_middleware(
            Arc::new(credentials),
            "Registrations",
        ))),
        None => listing,
    };

    Router::new()
        .route("/submit", post(handlers::submit_registration))
        .merge(listing)
        .with_state(service)
}
