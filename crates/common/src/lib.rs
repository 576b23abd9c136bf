//! # Locator Common
//!
//! 这个 crate 提供了服务定位器各层共享的类型和错误定义。
//!
//! ## 核心类型
//!
//! - [`Lifetime`] - 注册的生命周期策略（单例 / 工厂）
//! - [`TypeInfo`] - 能力（capability）的类型标识
//! - [`RegistrationDescriptor`] - 单条注册的只读快照
//! - [`RegistryError`] - 注册表操作错误
//!
//! ## 设计原则
//!
//! - 以类型作为能力标识，`dyn Trait` 同样是合法的能力
//! - 提供者自身的错误原样向调用者传播
//! - 注册表状态只通过显式的注册 / 重置操作改变

pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
