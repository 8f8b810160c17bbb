use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info, warn};
use validator::{Validate, ValidationError, ValidationErrors};

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite://artfusion.db?mode=rwc";
const DEFAULT_MEDIA_URL: &str = "/media/";
const DEFAULT_SITE_TITLE: &str = "ArtFusion";
const DEFAULT_SITE_HEADER: &str = "MyArt";
const CONFIG_DIR: &str = "config";

/// Site-wide labels shown by the public pages and the admin index.
///
/// Built once at start-up and handed to the template layer and admin
/// handlers through `AppState`; nothing mutates it afterwards.
#[derive(Clone, Debug, Deserialize, Serialize, Validate, PartialEq, Eq)]
pub struct SiteConfig {
    /// Browser/site title
    #[serde(default = "default_site_title")]
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    /// Header shown on top of the admin index
    #[serde(default = "default_site_header")]
    #[validate(length(min = 1, max = 100))]
    pub header: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            header: default_site_header(),
        }
    }
}

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct AppConfig {
    /// Database connection URL
    pub database_url: String,

    /// Server host address
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Application environment
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Whether to run database migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,

    /// DB pool: max connections
    #[serde(default = "default_db_max_connections")]
    #[validate(range(min = 1))]
    pub db_max_connections: u32,

    /// DB pool: min connections
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,

    /// DB timeouts (seconds)
    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,
    #[serde(default = "default_db_idle_timeout_secs")]
    pub db_idle_timeout_secs: u64,
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,

    /// Prefix prepended to stored image paths when building links
    #[serde(default = "default_media_url")]
    #[validate(length(min = 1))]
    pub media_url: String,

    /// Directory served under `/media`; media is expected to be served
    /// elsewhere when unset
    #[serde(default)]
    pub media_root: Option<String>,

    /// Bearer token required by the admin API
    #[serde(default)]
    pub admin_token: Option<String>,

    /// Default page size for admin list endpoints
    #[serde(default = "default_admin_page_size")]
    #[validate(range(min = 1, max = 1000))]
    pub admin_page_size: u64,

    /// Maximum page size accepted by admin list endpoints
    #[serde(default = "default_admin_max_page_size")]
    #[validate(range(min = 1, max = 1000))]
    pub admin_max_page_size: u64,

    /// Site title/header
    #[serde(default)]
    #[validate]
    pub site: SiteConfig,
}

impl AppConfig {
    /// Creates a new configuration with defaults for everything but the
    /// connection and listener settings
    pub fn new(database_url: String, host: String, port: u16, environment: String) -> Self {
        Self {
            database_url,
            host,
            port,
            environment,
            log_level: default_log_level(),
            log_json: false,
            auto_migrate: false,
            db_max_connections: default_db_max_connections(),
            db_min_connections: default_db_min_connections(),
            db_connect_timeout_secs: default_db_connect_timeout_secs(),
            db_idle_timeout_secs: default_db_idle_timeout_secs(),
            db_acquire_timeout_secs: default_db_acquire_timeout_secs(),
            media_url: default_media_url(),
            media_root: None,
            admin_token: None,
            admin_page_size: default_admin_page_size(),
            admin_max_page_size: default_admin_max_page_size(),
            site: SiteConfig::default(),
        }
    }

    /// Gets log level reference
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Checks if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Checks if running in development environment
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Admin token with surrounding whitespace removed; blank counts as unset
    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    fn validate_additional_constraints(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self.is_development() && self.admin_token().is_none() {
            let mut err = ValidationError::new("admin_token_required");
            err.message = Some(
                "Set APP__ADMIN_TOKEN outside development; the admin API would otherwise be open"
                    .into(),
            );
            errors.add("admin_token", err);
        }

        if self.admin_page_size > self.admin_max_page_size {
            let mut err = ValidationError::new("admin_page_size");
            err.message = Some("admin_page_size cannot exceed admin_max_page_size".into());
            errors.add("admin_page_size", err);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Default value functions
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_db_max_connections() -> u32 {
    10
}
fn default_db_min_connections() -> u32 {
    1
}
fn default_db_connect_timeout_secs() -> u64 {
    30
}
fn default_db_idle_timeout_secs() -> u64 {
    600
}
fn default_db_acquire_timeout_secs() -> u64 {
    8
}

fn default_media_url() -> String {
    DEFAULT_MEDIA_URL.to_string()
}

fn default_admin_page_size() -> u64 {
    20
}

fn default_admin_max_page_size() -> u64 {
    100
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

fn default_site_header() -> String {
    DEFAULT_SITE_HEADER.to_string()
}

/// Validates log level values
fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

/// Initializes tracing using the provided log level as the default filter
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("artfusion={},tower_http=info", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let filter = EnvFilter::new(filter_directive);
    if json {
        let _ = fmt().with_env_filter(filter).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter).try_init();
    }
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (config/default.toml)
/// 3. Environment-specific config (config/{env}.toml)
/// 4. Environment variables (APP__*)
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    load_config_from(Path::new(CONFIG_DIR), &run_env)
}

/// Same as [`load_config`] with an explicit config directory and profile.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, AppConfigError> {
    info!("Loading configuration for environment: {}", run_env);

    if !config_dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            config_dir.display()
        );
    }

    let config = Config::builder()
        .set_default("database_url", DEFAULT_DATABASE_URL)?
        .set_default("host", "0.0.0.0")?
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("environment", run_env)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&config_dir.join("default").to_string_lossy()).required(false))
        .add_source(File::with_name(&config_dir.join(run_env).to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    app_config.validate_additional_constraints().map_err(|e| {
        error!("Configuration security validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    if app_config.admin_token().is_none() {
        warn!("APP__ADMIN_TOKEN is not set; the admin API accepts unauthenticated requests");
    }

    info!("Configuration loaded successfully");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn base_config() -> AppConfig {
        AppConfig::new(
            "sqlite::memory:".into(),
            "127.0.0.1".into(),
            8080,
            "production".into(),
        )
    }

    #[test]
    fn non_dev_requires_admin_token() {
        let cfg = base_config();
        let errors = cfg.validate_additional_constraints().unwrap_err();
        assert!(errors.field_errors().contains_key("admin_token"));
    }

    #[test]
    fn blank_admin_token_counts_as_unset() {
        let mut cfg = base_config();
        cfg.admin_token = Some("   ".into());
        assert!(cfg.admin_token().is_none());
        assert!(cfg.validate_additional_constraints().is_err());
    }

    #[test]
    fn non_dev_with_token_passes() {
        let mut cfg = base_config();
        cfg.admin_token = Some("s3cret".into());
        assert!(cfg.validate_additional_constraints().is_ok());
    }

    #[test]
    fn development_allows_open_admin() {
        let mut cfg = base_config();
        cfg.environment = "development".into();
        assert!(cfg.validate_additional_constraints().is_ok());
    }

    #[test]
    fn page_size_cannot_exceed_maximum() {
        let mut cfg = base_config();
        cfg.admin_token = Some("s3cret".into());
        cfg.admin_page_size = 500;
        cfg.admin_max_page_size = 50;
        let errors = cfg.validate_additional_constraints().unwrap_err();
        assert!(errors.field_errors().contains_key("admin_page_size"));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut cfg = base_config();
        cfg.log_level = "verbose".into();
        let errors = cfg.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("log_level"));
    }

    #[test]
    fn loads_site_labels_from_profile_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("staging.toml"),
            r#"
                database_url = "sqlite::memory:"
                admin_token = "token-from-file"
                media_url = "https://cdn.example.com/media/"

                [site]
                title = "Gallery"
                header = "Gallery admin"
            "#,
        )
        .unwrap();

        let cfg = load_config_from(dir.path(), "staging").unwrap();

        assert_eq!(cfg.environment, "staging");
        assert_eq!(cfg.site.title, "Gallery");
        assert_eq!(cfg.site.header, "Gallery admin");
        assert_eq!(cfg.media_url, "https://cdn.example.com/media/");
        assert_eq!(cfg.admin_token(), Some("token-from-file"));
    }

    #[test]
    fn site_labels_default_when_absent() {
        let dir = TempDir::new().unwrap();
        let cfg = load_config_from(dir.path(), "development").unwrap();
        assert_eq!(cfg.site, SiteConfig::default());
        assert_eq!(cfg.port, DEFAULT_PORT);
    }
}
