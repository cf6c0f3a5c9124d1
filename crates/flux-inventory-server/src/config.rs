use anyhow::{anyhow, Result};
use config::{Config, Environment, File, FileFormat};
use flux_inventory::PoolConfig;
use flux_inventory_api::ApiSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 环境变量前缀，例如 `FLUX_INVENTORY__DATABASE__URL`
pub const ENV_PREFIX: &str = "FLUX_INVENTORY";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: PoolConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// 请求级超时（秒）
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

/// 日志输出格式
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ApiConfig {
    /// 在 500 响应中返回内部错误详情（仅开发环境开启）
    #[serde(default)]
    pub expose_internal_errors: bool,
}

// 默认值函数
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default trait 实现
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: PoolConfig::default(),
            logging: LoggingConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl AppConfig {
    /// 加载配置：默认值 → TOML 文件（可选）→ 环境变量
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// 同 [`AppConfig::load`]，`env` 不为空时代替进程环境变量（用于测试）
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow!("server.port must be greater than 0"));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(anyhow!("server.request_timeout_secs must be greater than 0"));
        }
        if self.database.url.trim().is_empty() {
            return Err(anyhow!("database.url must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(anyhow!("database.max_connections must be greater than 0"));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(anyhow!(
                "database.min_connections ({}) cannot be greater than database.max_connections ({})",
                self.database.min_connections,
                self.database.max_connections
            ));
        }
        if self.database.acquire_timeout_secs == 0 {
            return Err(anyhow!("database.acquire_timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            request_timeout: Duration::from_secs(self.server.request_timeout_secs),
            expose_internal_errors: self.api.expose_internal_errors,
        }
    }
}
