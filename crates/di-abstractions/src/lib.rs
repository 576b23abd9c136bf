//! # Service Registry Abstractions
//!
//! 服务注册表抽象层，定义能力注册和解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`ServiceRegistry`] - 注册表接口
//! - [`RegistryOptions`] - 注册表配置（宽松 / 严格）
//! - [`Requirements`] - 启动时必须存在的能力清单
//! - [`ResolveContext`] - 解析链，用于检测循环依赖

pub mod options;
pub mod registry;
pub mod requirements;
pub mod resolver;
pub mod stats;

pub use options::*;
pub use registry::*;
pub use requirements::*;
pub use resolver::*;
pub use stats::*;
