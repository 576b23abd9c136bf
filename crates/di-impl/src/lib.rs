//! # 服务注册表具体实现
//!
//! 提供线程安全的服务注册表：
//!
//! - [`ServiceRegistryImpl`] - 以能力类型为键的注册表，支持单例和工厂两种生命周期
//! - [`global`] - 进程级注册表，供偏好环境查找的应用使用
//!
//! ```
//! use locator_abstractions::ServiceRegistry;
//! use locator_registry::ServiceRegistryImpl;
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! let registry = ServiceRegistryImpl::new();
//! registry
//!     .register_singleton::<dyn Greeter, _>(|| Ok(Arc::new(English) as Arc<dyn Greeter>))
//!     .unwrap();
//!
//! let greeter = registry.resolve::<dyn Greeter>().unwrap();
//! assert_eq!(greeter.greet(), "hello");
//! ```

mod global;
mod registry;
mod resolution;

pub use global::global;
pub use registry::ServiceRegistryImpl;
