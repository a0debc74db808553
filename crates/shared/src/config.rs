//! Application configuration management.

use serde::Deserialize;

/// Flat environment variables honored on top of the layered sources.
///
/// Each pair maps a legacy variable onto its configuration key.
const LEGACY_DATABASE_ENV: [(&str, &str); 5] = [
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
];

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Database configuration.
///
/// The connection URL is assembled from its parts unless `url` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// URL scheme (`postgres` or `sqlite`).
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Database host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Database port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database user.
    #[serde(default = "default_user")]
    pub user: String,
    /// Database password.
    #[serde(default)]
    pub password: String,
    /// Database name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Full connection URL, overriding the assembled one.
    #[serde(default)]
    pub url: Option<String>,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_scheme() -> String {
    "postgres".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_name() -> String {
    "bookholder".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            name: default_name(),
            url: None,
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

impl DatabaseConfig {
    /// Returns the URL used to open the application pool.
    #[must_use]
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => self.url_for(&self.name),
        }
    }

    /// Returns the URL of the Postgres maintenance database, used to create
    /// the target database when it is missing.
    ///
    /// `None` when an explicit `url` is configured or the backend is not Postgres.
    #[must_use]
    pub fn maintenance_url(&self) -> Option<String> {
        if self.url.is_some() || !self.is_postgres() {
            return None;
        }
        Some(self.url_for("postgres"))
    }

    /// Returns true if the configured backend is Postgres.
    #[must_use]
    pub fn is_postgres(&self) -> bool {
        let scheme = match &self.url {
            Some(url) => url.split("://").next().unwrap_or_default(),
            None => self.scheme.as_str(),
        };
        matches!(scheme, "postgres" | "postgresql")
    }

    fn url_for(&self, database: &str) -> String {
        format!(
            "{}://{}:{}@{}:{}/{}?sslmode=disable",
            self.scheme, self.user, self.password, self.host, self.port, database
        )
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "bookholder=debug,sea_orm=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// `BOOKHOLDER__*` variables, then the flat `DB_*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BOOKHOLDER").separator("__"));

        for (var, key) in LEGACY_DATABASE_ENV {
            let value = std::env::var(var).ok().filter(|v| !v.is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }
}
