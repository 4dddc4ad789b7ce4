//! HTTP application assembly

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, middleware::from_fn, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, RegistrationConfig, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::registration::{routes as registration_routes, RegistrationService};

/// Simple health check endpoint (no auth required)
async fn health_check() -> StatusCode {
    StatusCode::OK
}

fn swagger_routes(swagger: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: swagger.title.clone(),
        version: swagger.version.clone(),
        description: swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let router =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        router.layer(from_fn(middleware::basic_auth_middleware(
            Arc::new(credentials),
            "Swagger UI",
        )))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        router
    }
}

/// Build the application router with all layers
pub fn create_app(
    registration_service: Arc<RegistrationService>,
    app: &AppConfig,
    registration: &RegistrationConfig,
    swagger: &SwaggerConfig,
) -> Router {
    let admin_credentials = registration.admin_credentials();
    if admin_credentials.is_some() {
        tracing::info!("Registration listing protected by basic auth");
    } else {
        tracing::warn!("Registration listing is public (no admin credentials configured)");
    }

    Router::new()
        .merge(swagger_routes(swagger))
        .merge(registration_routes::routes(
            registration_service,
            admin_credentials,
        ))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(app.max_request_body_size))
        .layer(middleware::cors_layer(app.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
