use crate::{
    AuthConfig, BroadcastConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, CacheConfig, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, DatabaseConfig, IdentityConfig, LoggingConfig,
    ServerConfig, WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cache: CacheConfig,
    pub identity: IdentityConfig,
    pub broadcast: BroadcastConfig,
    pub websocket: WebSocketConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CHAT_CONFIG_DIR env var, else use ./.chat/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CHAT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: CHAT_CONFIG_DIR env var > ./.chat/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.cache.validate()?;
        self.identity.validate()?;
        self.broadcast.validate()?;
        self.websocket.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256 ({})",
            if self.auth.jwt_secret.is_some() {
                "secret set"
            } else {
                "secret missing"
            }
        );
        info!(
            "  cache: {:?}, identity ttl={}s, profile ttl={}s",
            self.cache.backend, self.cache.identity_ttl_secs, self.cache.profile_ttl_secs
        );
        info!(
            "  identity: {} (timeout {}s)",
            self.identity.base_url, self.identity.timeout_secs
        );

        if self.broadcast.is_unbounded() {
            info!("  broadcast: unbounded intake queue (no publisher backpressure)");
        } else {
            info!(
                "  broadcast: intake queue capacity {}",
                self.broadcast.queue_capacity
            );
        }

        info!("  websocket: buffer={}", self.websocket.send_buffer_size);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CHAT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CHAT_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "CHAT_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Database
        Self::apply_env_string("CHAT_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("CHAT_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);

        // Cache
        Self::apply_env_parse("CHAT_CACHE_BACKEND", &mut self.cache.backend);
        Self::apply_env_option_string("CHAT_CACHE_REDIS_URL", &mut self.cache.redis_url);
        Self::apply_env_parse(
            "CHAT_CACHE_IDENTITY_TTL_SECS",
            &mut self.cache.identity_ttl_secs,
        );
        Self::apply_env_parse(
            "CHAT_CACHE_PROFILE_TTL_SECS",
            &mut self.cache.profile_ttl_secs,
        );

        // Identity authority
        Self::apply_env_string("CHAT_IDENTITY_BASE_URL", &mut self.identity.base_url);
        Self::apply_env_parse(
            "CHAT_IDENTITY_TIMEOUT_SECS",
            &mut self.identity.timeout_secs,
        );

        // Broadcast
        Self::apply_env_parse(
            "CHAT_BROADCAST_QUEUE_CAPACITY",
            &mut self.broadcast.queue_capacity,
        );

        // WebSocket
        Self::apply_env_parse(
            "CHAT_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );

        // Logging
        Self::apply_env_parse("CHAT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CHAT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CHAT_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
