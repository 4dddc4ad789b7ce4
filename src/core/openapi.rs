use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::registration::{dtos as registration_dtos, handlers as registration_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        registration_handlers::submit_registration,
        registration_handlers::list_registrations,
    ),
    components(
        schemas(
            registration_dtos::RegistrationPayload,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "registration", description = "User registration form submissions"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Sobreloja API",
        version = "0.1.0",
        description = "API documentation for Sobreloja registration",
    )
)]
pub struct ApiDoc;

/// Adds the HTTP Basic scheme guarding the listing endpoint
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
