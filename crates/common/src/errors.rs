//! 错误类型定义

use thiserror::Error;

/// 提供者构造实例失败时返回的错误
///
/// 注册表不会包装或重试它，调用者可以通过 `downcast_ref` 取回原始错误类型。
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// 注册表错误类型
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("能力未注册: {type_name}")]
    NotRegistered { type_name: String },

    #[error("能力已注册（严格模式下不允许重复注册）: {type_name}")]
    DuplicateRegistration { type_name: String },

    #[error("检测到循环依赖: {dependency_chain}")]
    CircularDependency { dependency_chain: String },

    #[error("缺少必需的注册: {}", .type_names.join(", "))]
    MissingRegistrations { type_names: Vec<String> },

    #[error("缓存实例的类型与能力不一致: {type_name}")]
    TypeMismatch { type_name: String },

    /// 提供者返回的错误，原样透传
    #[error(transparent)]
    Provider(ProviderError),
}

impl RegistryError {
    /// 创建未注册错误
    pub fn not_registered(type_name: impl Into<String>) -> Self {
        Self::NotRegistered {
            type_name: type_name.into(),
        }
    }

    /// 创建重复注册错误
    pub fn duplicate(type_name: impl Into<String>) -> Self {
        Self::DuplicateRegistration {
            type_name: type_name.into(),
        }
    }

    /// 是否为未注册错误
    pub fn is_not_registered(&self) -> bool {
        matches!(self, Self::NotRegistered { .. })
    }

    /// 取回提供者的原始错误
    pub fn provider_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Provider(source) => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("配置值无效: {key} = {value}")]
    InvalidValue { key: String, value: String },
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("注册表错误: {source}")]
    RegistryError {
        #[from]
        source: RegistryError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ProviderResult<T> = Result<T, ProviderError>;
pub type RegistryResult<T> = Result<T, RegistryError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
