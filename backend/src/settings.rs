//! Runtime configuration loaded via OrthoConfig.
//!
//! Every value can come from a `CATALOG_*` environment variable, a matching
//! command-line flag (`--db-host`, `--port`, ...) or a configuration file.
//! Database access is optional: with neither `CATALOG_DATABASE_URL` nor the
//! `CATALOG_DB_*` parts the server runs on the in-memory store.
//!
//! The environment layer turns any comma-bearing value into a list. Text
//! settings join such lists back together, so a password like `se,cret` loads
//! unchanged apart from whitespace around the commas.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_POOL_SIZE: u32 = 5;
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Errors raised while turning settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Some but not all of the `CATALOG_DB_*` parts are set.
    #[error("incomplete database settings: missing {missing}")]
    IncompleteDatabase { missing: String },
    /// The bind host and port do not form a socket address.
    #[error("invalid bind address {value}: {message}")]
    BindAddress { value: String, message: String },
}

/// Service configuration.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG")]
pub struct CatalogSettings {
    #[serde(default, deserialize_with = "joined_text")]
    pub db_host: Option<String>,
    pub db_port: Option<u16>,
    #[serde(default, deserialize_with = "joined_text")]
    pub db_user: Option<String>,
    #[serde(default, deserialize_with = "joined_text")]
    pub db_password: Option<String>,
    #[serde(default, deserialize_with = "joined_text")]
    pub db_name: Option<String>,
    /// Require TLS for database connections.
    #[ortho_config(default = false)]
    pub db_tls: bool,
    /// Maximum pooled database connections.
    pub db_pool_size: Option<u32>,
    /// Full connection string; takes precedence over the `db_*` parts.
    #[serde(default, deserialize_with = "joined_text")]
    pub database_url: Option<String>,
    #[serde(default, deserialize_with = "joined_text")]
    pub bind_host: Option<String>,
    pub port: Option<u16>,
    /// Browser origins allowed to call the API; `*` allows any. Empty disables
    /// cross-origin access.
    #[serde(default, deserialize_with = "origin_list")]
    #[ortho_config(default = vec![], merge_strategy = "replace")]
    pub cors_origins: Vec<String>,
    /// Seed the sample movies at startup when the store is empty.
    #[ortho_config(default = false)]
    pub sample_data: bool,
}

impl std::fmt::Debug for CatalogSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSettings")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &self.db_password.as_ref().map(|_| "<redacted>"))
            .field("db_name", &self.db_name)
            .field("db_tls", &self.db_tls)
            .field("db_pool_size", &self.db_pool_size)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("bind_host", &self.bind_host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("sample_data", &self.sample_data)
            .finish()
    }
}

fn scalar_text(value: Value) -> Result<String, String> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(format!("expected text, found {other}")),
    }
}

fn joined_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(parts)) => parts
            .into_iter()
            .map(scalar_text)
            .collect::<Result<Vec<_>, _>>()
            .map(|parts| Some(parts.join(",")))
            .map_err(de::Error::custom),
        Some(other) => scalar_text(other).map(Some).map_err(de::Error::custom),
    }
}

fn origin_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(single) => vec![single],
    };
    let mut origins = Vec::with_capacity(items.len());
    for item in items {
        let text = scalar_text(item).map_err(de::Error::custom)?;
        let origin = text.trim();
        if !origin.is_empty() {
            origins.push(origin.to_owned());
        }
    }
    Ok(origins)
}

/// Quote a keyword/value connection string value when it needs it.
fn conninfo_value(value: &str) -> String {
    let plain = !value.is_empty()
        && !value
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '\\');
    if plain {
        return value.to_owned();
    }
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

impl CatalogSettings {
    /// Connection string for the movie database, if one is configured.
    ///
    /// `database_url` wins when set. Otherwise host, user and name must all be
    /// present (password and port are optional) and are combined into a
    /// keyword/value string so credentials need no URL escaping.
    ///
    /// # Errors
    /// [`SettingsError::IncompleteDatabase`] when only some parts are set.
    pub fn database_url(&self) -> Result<Option<String>, SettingsError> {
        if let Some(url) = self.database_url.as_deref().filter(|url| !url.trim().is_empty()) {
            return Ok(Some(url.to_owned()));
        }

        let parts = [
            ("CATALOG_DB_HOST", self.db_host.as_deref()),
            ("CATALOG_DB_USER", self.db_user.as_deref()),
            ("CATALOG_DB_NAME", self.db_name.as_deref()),
        ];
        let missing: Vec<&str> = parts
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if missing.len() == parts.len() {
            return Ok(None);
        }
        if !missing.is_empty() {
            return Err(SettingsError::IncompleteDatabase {
                missing: missing.join(", "),
            });
        }

        let [(_, Some(host)), (_, Some(user)), (_, Some(name))] = parts else {
            return Ok(None);
        };
        let mut conninfo = format!(
            "host={} port={} user={} dbname={}",
            conninfo_value(host),
            self.db_port(),
            conninfo_value(user),
            conninfo_value(name),
        );
        if let Some(password) = self.db_password.as_deref() {
            conninfo.push_str(" password=");
            conninfo.push_str(&conninfo_value(password));
        }
        Ok(Some(conninfo))
    }

    pub fn db_port(&self) -> u16 {
        self.db_port.unwrap_or(DEFAULT_DB_PORT)
    }

    pub fn db_pool_size(&self) -> u32 {
        self.db_pool_size.unwrap_or(DEFAULT_POOL_SIZE).max(1)
    }

    /// Socket address the HTTP server binds to.
    ///
    /// # Errors
    /// [`SettingsError::BindAddress`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST);
        let port = self.port.unwrap_or(DEFAULT_PORT);
        let value = format!("{host}:{port}");
        value
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::BindAddress {
                message: err.to_string(),
                value,
            })
    }
}
