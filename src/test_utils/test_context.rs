//! Helpers for running isolated webserver instances
use crate::{
    catalog::GreenfieldCatalog,
    docs::DocumentAssembler,
    policies::Policies,
    router::{setup_app_router, AppState},
    settings::{ApiKey, AppEnvironment, Authentication, Docs, Server, Settings},
};
use axum::Router;

/// A reference to an in-process greenfield-docs app in an isolated test environment
#[derive(Debug)]
pub(crate) struct TestContext {
    app: Router,
}

impl TestContext {
    /// Key granted every policy.
    pub(crate) const ADMIN_KEY: &'static str = "admin-key";
    /// Key granted read-only policies.
    pub(crate) const VIEWER_KEY: &'static str = "viewer-key";

    /// Create a new test context
    pub(crate) fn new() -> Self {
        let settings = Settings {
            server: Server {
                environment: AppEnvironment::Local,
                port: 0,
                timeout_ms: 1_000,
            },
            docs: Docs::default(),
            authentication: Authentication {
                api_keys: vec![
                    ApiKey {
                        key: Self::ADMIN_KEY.to_string(),
                        user_id: "admin".to_string(),
                        permissions: [
                            Policies::CAN_VIEW_PROFILE,
                            Policies::CAN_VIEW_INVOICES,
                            Policies::CAN_CREATE_INVOICE,
                        ]
                        .map(String::from)
                        .to_vec(),
                    },
                    ApiKey {
                        key: Self::VIEWER_KEY.to_string(),
                        user_id: "viewer".to_string(),
                        permissions: vec![Policies::CAN_VIEW_INVOICES.to_string()],
                    },
                ],
            },
            path: None,
        };

        let document = DocumentAssembler::default().assemble_catalog(&GreenfieldCatalog);
        let app = setup_app_router(AppState::default(), &settings, document);

        Self { app }
    }

    /// A clone of the app router, sharing state with every other clone
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }
}
