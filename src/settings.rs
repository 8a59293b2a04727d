//! Settings / Configuration.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Names of environments for greenfield-docs.
/// Overrides serialization to force lower case in settings and
/// environment variables
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    /// Local environment (local testing).
    Local,
    /// Official Develop environment.
    Dev,
    /// Official environment.
    Staging,
    /// Official Production environment.
    Prod,
}

/// Implement display to force environment to lower case
impl std::fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Server settings.
#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    /// Server [AppEnvironment].
    pub environment: AppEnvironment,
    /// Server port.
    pub port: u16,
    /// Server timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Documentation settings.
#[derive(Clone, Debug, Deserialize)]
pub struct Docs {
    /// Root path the service is mounted under. Both the docs UI
    /// (`<root>docs`) and the login page (`<root>account/login`) hang off it.
    #[serde(default = "default_root_path")]
    pub root_path: String,
}

impl Default for Docs {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
        }
    }
}

impl Docs {
    /// The root path, starting and ending with `/`.
    pub fn normalized_root_path(&self) -> String {
        let trimmed = self.root_path.trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        }
    }

    /// Path of the documentation UI.
    pub fn docs_path(&self) -> String {
        format!("{}docs", self.normalized_root_path())
    }

    /// Path the generated OpenAPI JSON is served at.
    pub fn openapi_json_path(&self) -> String {
        format!("{}swagger/v1/swagger.json", self.normalized_root_path())
    }

    /// Path of the login page.
    pub fn login_path(&self) -> String {
        format!("{}account/login", self.normalized_root_path())
    }
}

fn default_root_path() -> String {
    "/".to_string()
}

/// An API key and what it grants.
#[derive(Clone, Deserialize)]
pub struct ApiKey {
    /// The key, sent as `Authorization: token <key>`.
    pub key: String,
    /// User the key belongs to.
    pub user_id: String,
    /// Policies granted to the key.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("ApiKey")
            .field("key", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("permissions", &self.permissions)
            .finish()
    }
}

/// Authentication settings.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Authentication {
    /// Known API keys.
    #[serde(default)]
    pub api_keys: Vec<ApiKey>,
}

#[derive(Clone, Debug, Deserialize)]
/// Application settings.
pub struct Settings {
    /// Server settings
    pub server: Server,
    /// Documentation settings
    #[serde(default)]
    pub docs: Docs,
    /// Authentication settings
    #[serde(default)]
    pub authentication: Authentication,
    /// The path where the settings file resides.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load settings.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = config_path
            .unwrap_or(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/settings.toml"));
        // inject environment variables naming them properly on the settings
        // e.g. [docs] root_path="/btcpay/"
        // would be injected with environment variable GREENFIELD_DOCS_DOCS__ROOT_PATH="/btcpay/"
        let s = Config::builder()
            .add_source(File::with_name(&path.as_path().display().to_string()))
            .add_source(
                Environment::with_prefix("GREENFIELD_DOCS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let mut settings: Self = s.try_deserialize()?;
        settings.path = Some(path);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(root_path: &str) -> Docs {
        Docs {
            root_path: root_path.to_string(),
        }
    }

    #[test]
    fn test_default_root_path() {
        let docs = Docs::default();

        assert_eq!(docs.normalized_root_path(), "/");
        assert_eq!(docs.docs_path(), "/docs");
        assert_eq!(docs.login_path(), "/account/login");
        assert_eq!(docs.openapi_json_path(), "/swagger/v1/swagger.json");
    }

    #[test]
    fn test_root_path_normalization() {
        assert_eq!(docs("").normalized_root_path(), "/");
        assert_eq!(docs("btcpay").normalized_root_path(), "/btcpay/");
        assert_eq!(docs("/btcpay").docs_path(), "/btcpay/docs");
        assert_eq!(docs("/btcpay/").login_path(), "/btcpay/account/login");
    }

    #[test]
    fn test_load_bundled_settings() -> testresult::TestResult {
        let settings = Settings::load(None)?;

        assert_eq!(settings.server.environment, AppEnvironment::Local);
        assert!(settings.server.port > 0);
        assert!(!settings.authentication.api_keys.is_empty());

        Ok(())
    }

    #[test]
    fn test_environment_overrides_root_path() -> testresult::TestResult {
        std::env::set_var("GREENFIELD_DOCS_DOCS__ROOT_PATH", "/btcpay/");
        let settings = Settings::load(None);
        std::env::remove_var("GREENFIELD_DOCS_DOCS__ROOT_PATH");

        let settings = settings?;
        assert_eq!(settings.docs.docs_path(), "/btcpay/docs");
        assert_eq!(settings.docs.login_path(), "/btcpay/account/login");

        Ok(())
    }

    #[test]
    fn test_api_key_debug_redacts_key() {
        let key = ApiKey {
            key: "secret".to_string(),
            user_id: "alice".to_string(),
            permissions: Vec::new(),
        };

        assert!(!format!("{key:?}").contains("secret"));
    }
}
