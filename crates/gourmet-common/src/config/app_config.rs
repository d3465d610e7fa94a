//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use chrono_tz::Tz;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub media: MediaConfig,
    pub locale: LocaleConfig,
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Parse an `APP_ENV` value, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// JWT configuration. Expiry values are in seconds.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Uploaded media configuration
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory uploaded files are written to
    pub upload_dir: String,
    /// URL prefix stored paths are served under, with a trailing slash
    pub media_url: String,
    pub max_file_size_mb: u32,
}

impl MediaConfig {
    /// Maximum size of a single uploaded file in bytes
    #[must_use]
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb as usize * 1024 * 1024
    }
}

/// Locale settings used when rendering dates
#[derive(Debug, Clone, Copy)]
pub struct LocaleConfig {
    pub time_zone: Tz,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone)]
pub struct SnowflakeConfig {
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "gourmet-api".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

/// Longest accepted token lifetime in seconds (one year)
const MAX_TOKEN_EXPIRY_SECS: i64 = 365 * 24 * 60 * 60;

fn default_access_token_expiry() -> i64 {
    3600 // 60 minutes
}

fn default_refresh_token_expiry() -> i64 {
    86400 // 1 day
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_upload_dir() -> String {
    "./media".to_string()
}

fn default_media_url() -> String {
    "/media/".to_string()
}

fn default_max_file_size() -> u32 {
    20
}

fn default_time_zone() -> Tz {
    chrono_tz::Asia::Tokyo
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if required variables are missing or invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let worker_id: u16 = parse_var(&lookup, "WORKER_ID")?.unwrap_or(0);
        if worker_id > gourmet_core::Snowflake::MAX_WORKER_ID {
            return Err(ConfigError::InvalidValue(
                "WORKER_ID",
                format!("{worker_id} exceeds {}", gourmet_core::Snowflake::MAX_WORKER_ID),
            ));
        }

        let time_zone = match lookup("TIME_ZONE") {
            Some(name) => Tz::from_str(name.trim())
                .map_err(|_| ConfigError::InvalidValue("TIME_ZONE", name))?,
            None => default_time_zone(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_var(&lookup, "API_PORT")?.ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var(&lookup, "DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            },
            jwt: JwtConfig {
                secret: lookup("JWT_SECRET")
                    .filter(|s| !s.is_empty())
                    .ok_or(ConfigError::MissingVar("JWT_SECRET"))?,
                access_token_expiry: token_expiry(&lookup, "JWT_ACCESS_TOKEN_EXPIRY")?
                    .unwrap_or_else(default_access_token_expiry),
                refresh_token_expiry: token_expiry(&lookup, "JWT_REFRESH_TOKEN_EXPIRY")?
                    .unwrap_or_else(default_refresh_token_expiry),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(&lookup, "RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var(&lookup, "RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            media: MediaConfig {
                upload_dir: lookup("UPLOAD_DIR").unwrap_or_else(default_upload_dir),
                media_url: lookup("MEDIA_URL")
                    .map(|url| with_trailing_slash(&url))
                    .unwrap_or_else(default_media_url),
                max_file_size_mb: parse_var(&lookup, "MAX_FILE_SIZE_MB")?
                    .unwrap_or_else(default_max_file_size),
            },
            locale: LocaleConfig { time_zone },
            snowflake: SnowflakeConfig { worker_id },
        })
    }
}

/// Parse an optional variable; present-but-unparseable values are an error
fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw))
        })
        .transpose()
}

/// Token lifetimes must be positive and at most `MAX_TOKEN_EXPIRY_SECS`
fn token_expiry<F>(lookup: &F, key: &'static str) -> Result<Option<i64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_var::<F, i64>(lookup, key)? {
        Some(secs) if !(1..=MAX_TOKEN_EXPIRY_SECS).contains(&secs) => Err(
            ConfigError::InvalidValue(key, format!("{secs} is outside 1..={MAX_TOKEN_EXPIRY_SECS}")),
        ),
        secs => Ok(secs),
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
