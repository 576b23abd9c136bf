//! 配置加载
//!
//! 配置来源按优先级从低到高：TOML 文件、带前缀的环境变量、代码中的覆盖值。
//! 环境变量使用 `__` 分隔层级，例如 `LOCATOR__REGISTRY__MODE=strict`。

use config::{Config, Environment, File, FileFormat};
use locator_abstractions::RegistryOptions;
use locator_common::{ConfigError, ConfigResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// 默认环境变量前缀
pub const DEFAULT_ENV_PREFIX: &str = "LOCATOR";

/// 日志设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// 日志级别
    pub level: String,
    /// 是否使用 JSON 格式
    pub json_format: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// 服务定位器设置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorSettings {
    /// 注册表配置
    pub registry: RegistryOptions,
    /// 日志设置
    pub logging: LoggingSettings,
}

/// 配置加载器
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    /// 配置文件及其是否必需
    files: Vec<(PathBuf, bool)>,
    /// 环境变量前缀，`None` 表示不读取环境变量
    env_prefix: Option<String>,
    /// 代码中的覆盖值
    overrides: Vec<(String, String)>,
}

impl SettingsLoader {
    /// 创建使用默认环境变量前缀的加载器
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_string()),
            overrides: Vec::new(),
        }
    }

    /// 添加 TOML 配置文件
    pub fn add_file(mut self, path: impl Into<PathBuf>, required: bool) -> Self {
        self.files.push((path.into(), required));
        self
    }

    /// 设置环境变量前缀
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// 不读取环境变量
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// 设置覆盖值，键使用点分路径，例如 `registry.mode`
    pub fn set_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// 加载并反序列化配置
    ///
    /// 应用可以用 `#[serde(flatten)]` 把 [`LocatorSettings`] 嵌入自己的配置结构。
    pub fn load<T: DeserializeOwned>(&self) -> ConfigResult<T> {
        let mut builder = Config::builder();

        for (path, required) in &self.files {
            if *required && !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            debug!("添加 TOML 配置文件: {}", path.display());
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(*required),
            );
        }

        if let Some(prefix) = &self.env_prefix {
            debug!("添加环境变量配置源，前缀: {}", prefix);
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            );
        }

        for (key, value) in &self.overrides {
            builder = builder
                .set_override(key.as_str(), value.as_str())
                .map_err(parse_error)?;
        }

        builder
            .build()
            .and_then(|config| config.try_deserialize::<T>())
            .map_err(parse_error)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_error(error: config::ConfigError) -> ConfigError {
    ConfigError::ParseError {
        source: Box::new(error),
    }
}
