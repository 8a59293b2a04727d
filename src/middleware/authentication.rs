//! API-key authentication.
//!
//! Resolves `Authorization: token <key>` against the configured keys and
//! attaches the key's [Claims] to the request. Requests with a missing or
//! unknown key continue without claims; handlers and the docs gate decide
//! what that means for them.

use crate::{
    extract::claims::{Claim, Claims, PERMISSION_CLAIM, USER_ID_CLAIM},
    settings::{self, ApiKey},
};
use axum::{
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use std::{collections::HashMap, sync::Arc};
use tracing::debug;

/// Known API keys, indexed by key.
#[derive(Clone, Debug, Default)]
pub struct ApiKeyStore {
    keys: Arc<HashMap<String, ApiKey>>,
}

impl ApiKeyStore {
    /// Store holding the keys from `settings`.
    pub fn new(settings: &settings::Authentication) -> Self {
        Self {
            keys: Arc::new(
                settings
                    .api_keys
                    .iter()
                    .map(|api_key| (api_key.key.clone(), api_key.clone()))
                    .collect(),
            ),
        }
    }

    /// Claims granted to `key`, if it is known.
    pub fn claims_for(&self, key: &str) -> Option<Claims> {
        self.keys.get(key).map(|api_key| {
            Claims::new(
                std::iter::once(Claim::new(USER_ID_CLAIM, &api_key.user_id)).chain(
                    api_key
                        .permissions
                        .iter()
                        .map(|permission| Claim::new(PERMISSION_CLAIM, permission)),
                ),
            )
        })
    }
}

/// Extract the key from an `Authorization` header value of the form `token <key>`.
pub fn parse_token(value: &str) -> Option<&str> {
    let (scheme, key) = value.trim().split_once(' ')?;
    let key = key.trim();

    (scheme.eq_ignore_ascii_case("token") && !key.is_empty()).then_some(key)
}

/// Attach the claims of the request's API key, if any.
pub async fn authenticate<B>(
    State(store): State<ApiKeyStore>,
    mut request: Request<B>,
    next: Next<B>,
) -> Response {
    let claims = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_token)
        .and_then(|key| store.claims_for(key));

    match claims {
        Some(claims) => {
            debug!(user_id = ?claims.user_id(), "authenticated api key");
            request.extensions_mut().insert(claims);
        }
        None => debug!("request carries no known api key"),
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ApiKeyStore {
        ApiKeyStore::new(&settings::Authentication {
            api_keys: vec![ApiKey {
                key: "k1".to_string(),
                user_id: "alice".to_string(),
                permissions: vec!["btcpay.store.canviewinvoices".to_string()],
            }],
        })
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_token("token abc"), Some("abc"));
        assert_eq!(parse_token("Token  abc "), Some("abc"));
        assert_eq!(parse_token("Bearer abc"), None);
        assert_eq!(parse_token("token "), None);
        assert_eq!(parse_token("token"), None);
    }

    #[test]
    fn test_known_key_yields_claims() {
        let claims = store().claims_for("k1").unwrap();

        assert_eq!(claims.user_id(), Some("alice"));
        assert!(claims.has_permission("btcpay.store.canviewinvoices"));
    }

    #[test]
    fn test_unknown_key_yields_nothing() {
        assert_eq!(store().claims_for("nope"), None);
    }
}
