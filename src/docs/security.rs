//! Utoipa addon for the Greenfield API-key security scheme.

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify,
};

/// Name the API-key scheme is registered under.
pub const API_KEY_SCHEME: &str = "APIKey";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "Authorization";

const API_KEY_DESCRIPTION: &str = "BTCPay Server supports authenticating and authorizing users through an API Key that is generated by them. Send the API Key as a header value to Authorization with the format: token {token}. For a smoother experience, you can generate a url that redirects users to an API key creation screen.";

/// Utoipa addon registering the API-key security scheme under `name`.
#[derive(Debug)]
pub struct ApiKeyAddon<'a> {
    name: &'a str,
}

impl<'a> ApiKeyAddon<'a> {
    /// Addon registering the scheme under `name`.
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl Default for ApiKeyAddon<'static> {
    fn default() -> Self {
        Self::new(API_KEY_SCHEME)
    }
}

impl Modify for ApiKeyAddon<'_> {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            self.name,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                API_KEY_HEADER,
                API_KEY_DESCRIPTION,
            ))),
        );
    }
}
