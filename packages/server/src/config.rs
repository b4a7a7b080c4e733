use std::net::{AddrParseError, SocketAddr};

use common::storage::s3::S3Settings;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer};

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_DATABASE_PORT: u16 = 3306;

/// Variable names used by earlier deployments, honoured as fallbacks.
const LEGACY_STORAGE_VARS: &[(&str, &str)] = &[
    ("storage.endpoint", "ALIYUN_OSS_ENDPOINT"),
    ("storage.access_key_id", "ALIYUN_OSS_ACCESS_KEY_ID"),
    ("storage.access_key_secret", "ALIYUN_OSS_ACCESS_KEY_SECRET"),
    ("storage.bucket_name", "ALIYUN_OSS_BUCKET_NAME"),
];

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. `*` allows any origin. Default: `["*"]`.
    #[serde(default = "default_allow_origins")]
    pub allow_origins: Vec<String>,
    /// Preflight cache duration in seconds. Default: 3600.
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_allow_origins() -> Vec<String> {
    vec!["*".into()]
}
fn default_cors_max_age() -> u64 {
    3600
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: default_allow_origins(),
            max_age: default_cors_max_age(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Bind address. Default: "0.0.0.0".
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Listen port. Default: 8080. Non-numeric values fall back to the default.
    #[serde(default = "default_server_port", deserialize_with = "server_port")]
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

fn default_server_host() -> String {
    "0.0.0.0".into()
}
fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cors: CorsConfig::default(),
        }
    }
}

/// MySQL connection settings.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Default: "127.0.0.1".
    #[serde(default = "default_database_host")]
    pub host: String,
    /// Default: 3306. Non-numeric values fall back to the default.
    #[serde(default = "default_database_port", deserialize_with = "database_port")]
    pub port: u16,
    /// Default: "root".
    #[serde(default = "default_database_user")]
    pub user: String,
    /// Default: empty.
    #[serde(default)]
    pub password: String,
    /// Schema name. Default: "arena".
    #[serde(default = "default_database_name")]
    pub name: String,
    /// Upper bound of open pool connections. Default: 100.
    #[serde(default = "default_max_open_connections")]
    pub max_open_connections: u32,
    /// Connections kept warm while idle. Default: 10.
    #[serde(default = "default_max_idle_connections")]
    pub max_idle_connections: u32,
}

fn default_database_host() -> String {
    "127.0.0.1".into()
}
fn default_database_port() -> u16 {
    DEFAULT_DATABASE_PORT
}
fn default_database_user() -> String {
    "root".into()
}
fn default_database_name() -> String {
    "arena".into()
}
fn default_max_open_connections() -> u32 {
    100
}
fn default_max_idle_connections() -> u32 {
    10
}

impl DatabaseConfig {
    /// Connection URL with user and password percent-encoded.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            encode_userinfo(&self.user),
            encode_userinfo(&self.password),
            self.host,
            self.port,
            self.name
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_database_host(),
            port: default_database_port(),
            user: default_database_user(),
            password: String::new(),
            name: default_database_name(),
            max_open_connections: default_max_open_connections(),
            max_idle_connections: default_max_idle_connections(),
        }
    }
}

/// S3-compatible object storage used for image uploads.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default)]
    pub endpoint: String,
    /// Signing region. Default: "oss-cn-hangzhou".
    #[serde(default = "default_storage_region")]
    pub region: String,
    #[serde(default)]
    pub access_key_id: String,
    #[serde(default)]
    pub access_key_secret: String,
    #[serde(default)]
    pub bucket_name: String,
}

fn default_storage_region() -> String {
    "oss-cn-hangzhou".into()
}

impl StorageConfig {
    pub fn s3_settings(&self) -> S3Settings {
        S3Settings {
            endpoint: self.endpoint.clone(),
            region: self.region.clone(),
            bucket_name: self.bucket_name.clone(),
            access_key_id: self.access_key_id.clone(),
            access_key_secret: self.access_key_secret.clone(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            region: default_storage_region(),
            access_key_id: String::new(),
            access_key_secret: String::new(),
            bucket_name: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Maximum request body size for upload endpoints. Default: 32 MiB.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_max_body_bytes() -> usize {
    32 * 1024 * 1024
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        for (key, var) in LEGACY_STORAGE_VARS {
            if let Ok(value) = std::env::var(var)
                && !value.is_empty()
            {
                builder = builder.set_default(*key, value)?;
            }
        }

        builder
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., ARENA__DATABASE__HOST)
            .add_source(Environment::with_prefix("ARENA").separator("__"))
            .build()?
            .try_deserialize()
    }
}

fn server_port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    lenient_port(deserializer, DEFAULT_SERVER_PORT)
}

fn database_port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    lenient_port(deserializer, DEFAULT_DATABASE_PORT)
}

/// Accept a port as a number or numeric string; anything else yields `default`.
fn lenient_port<'de, D: Deserializer<'de>>(deserializer: D, default: u16) -> Result<u16, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortValue {
        Number(i64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let port = match PortValue::deserialize(deserializer)? {
        PortValue::Number(n) => u16::try_from(n).ok(),
        PortValue::Text(s) => s.trim().parse::<u16>().ok(),
        PortValue::Other(_) => None,
    };

    Ok(port.filter(|p| *p != 0).unwrap_or(default))
}

/// Percent-encode a URL userinfo component (RFC 3986 unreserved set kept).
fn encode_userinfo(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                String::from(b as char)
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}
