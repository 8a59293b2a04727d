//! Login gate in front of the documentation UI.

use crate::{extract::claims::Claims, settings};
use axum::{
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

/// Paths the gate protects and redirects to.
#[derive(Clone, Debug)]
pub struct DocsGate {
    docs_path: Arc<str>,
    login_path: Arc<str>,
}

impl DocsGate {
    /// Gate for the docs UI configured in `docs`.
    pub fn new(docs: &settings::Docs) -> Self {
        Self {
            docs_path: docs.docs_path().into(),
            login_path: docs.login_path().into(),
        }
    }

    /// Whether `path` is the docs path or lies below it, ignoring ASCII case.
    /// Matching is per segment: `/docs/x` matches, `/docsearch` does not.
    pub fn matches(&self, path: &str) -> bool {
        let prefix = self.docs_path.trim_end_matches('/');

        match path.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) => {
                matches!(path.as_bytes().get(prefix.len()), None | Some(b'/'))
            }
            _ => false,
        }
    }

    /// Login location sending the caller back to `path` afterwards.
    pub fn login_redirect(&self, path: &str) -> String {
        format!("{}?returnUrl={}", self.login_path, path)
    }
}

/// Redirect requests for the docs UI that carry no claims to the login page.
///
/// Only the presence of claims is checked. What an authenticated caller may
/// do is decided by the API endpoints themselves.
pub async fn require_login<B>(
    State(gate): State<DocsGate>,
    request: Request<B>,
    next: Next<B>,
) -> Response {
    let path = request.uri().path();
    let unauthenticated = request
        .extensions()
        .get::<Claims>()
        .map(Claims::is_empty)
        .unwrap_or(true);

    if unauthenticated && gate.matches(path) {
        let location = gate.login_redirect(path);
        debug!(%path, %location, "redirecting unauthenticated docs request");

        return (StatusCode::FOUND, [(header::LOCATION, location)]).into_response();
    }

    next.run(request).await
}
