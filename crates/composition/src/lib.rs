//! # 注册表组合层
//!
//! 负责在应用启动时把各个注册模块组合成一个可用的服务注册表。
//!
//! ## 主要功能
//!
//! - **注册表构建器**: 使用构建者模式应用注册模块并验证必需能力
//! - **注册模块**: 启动代码和测试代码共享的一组注册
//! - **配置加载**: TOML 文件加环境变量覆盖
//! - **日志初始化**: 基于 `tracing-subscriber`
//!
//! ## 基本使用
//!
//! ```rust
//! use locator_abstractions::ServiceRegistry;
//! use locator_composition::{FnModule, RegistryBuilder};
//! use std::sync::Arc;
//!
//! struct Clock;
//!
//! let registry = RegistryBuilder::new()
//!     .add_module(FnModule::new("clock", |registry| {
//!         registry.register_singleton::<Clock, _>(|| Ok(Arc::new(Clock)))
//!     }))
//!     .require::<Clock>()
//!     .build()
//!     .expect("注册表构建失败");
//!
//! assert!(registry.resolve::<Clock>().is_ok());
//! ```

pub mod builder;
pub mod logging;
pub mod module;
pub mod settings;

// 重新导出主要类型
pub use builder::RegistryBuilder;
pub use logging::{init_logging, LoggingConfig};
pub use module::{FnModule, RegistryModule};
pub use settings::{LocatorSettings, LoggingSettings, SettingsLoader, DEFAULT_ENV_PREFIX};

// 重新导出错误类型
pub use locator_common::InfrastructureError;
