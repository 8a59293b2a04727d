//! Claims extractor

use crate::error::{AppError, AppResult};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Claim type naming the authenticated user.
pub const USER_ID_CLAIM: &str = "userId";

/// Claim type naming a granted permission.
pub const PERMISSION_CLAIM: &str = "permission";

/// One statement about the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    /// What the claim is about.
    pub kind: String,
    /// The claimed value.
    pub value: String,
}

impl Claim {
    /// New claim.
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Claims attached to a request by the authentication layer.
///
/// A request nobody authenticated carries no `Claims` extension, which
/// extracts as an empty set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Claims(Vec<Claim>);

impl Claims {
    /// Claims from an iterator.
    pub fn new(claims: impl IntoIterator<Item = Claim>) -> Self {
        Self(claims.into_iter().collect())
    }

    /// Whether there are no claims at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the claims.
    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.0.iter()
    }

    /// The authenticated user, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.iter()
            .find(|claim| claim.kind == USER_ID_CLAIM)
            .map(|claim| claim.value.as_str())
    }

    /// Whether the permission `policy` was granted.
    pub fn has_permission(&self, policy: &str) -> bool {
        self.iter()
            .any(|claim| claim.kind == PERMISSION_CLAIM && claim.value == policy)
    }

    /// Fail unless the caller is authenticated and was granted `policy`.
    pub fn require_permission(&self, policy: &str) -> AppResult<()> {
        if self.is_empty() {
            return Err(AppError::unauthorized());
        }

        if !self.has_permission(policy) {
            return Err(AppError::missing_permission(policy));
        }

        Ok(())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Claims>().cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn claims() -> Claims {
        Claims::new([
            Claim::new(USER_ID_CLAIM, "alice"),
            Claim::new(PERMISSION_CLAIM, "btcpay.store.canviewinvoices"),
        ])
    }

    #[test]
    fn test_permission_lookup() {
        let claims = claims();

        assert_eq!(claims.user_id(), Some("alice"));
        assert!(claims.has_permission("btcpay.store.canviewinvoices"));
        assert!(!claims.has_permission("btcpay.store.cancreateinvoice"));
    }

    #[test]
    fn test_require_permission() {
        assert!(claims()
            .require_permission("btcpay.store.canviewinvoices")
            .is_ok());

        let forbidden = claims()
            .require_permission("btcpay.store.cancreateinvoice")
            .unwrap_err();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

        let unauthorized = Claims::default()
            .require_permission("btcpay.store.canviewinvoices")
            .unwrap_err();
        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);
    }
}
