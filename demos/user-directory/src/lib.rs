//! # 用户目录示例
//!
//! 演示如何通过服务注册表组装应用：
//!
//! - [`api::ApiService`] - 外部用户接口（HTTP 实现和测试替身）
//! - [`repository::UserRepository`] - 基于 `ApiService` 的仓储
//! - [`view_model::UserViewModel`] - 从注册表取得仓储并维护界面状态
//! - [`modules`] - 启动代码和测试共享的注册模块

pub mod api;
pub mod modules;
pub mod repository;
pub mod settings;
pub mod view_model;

pub use api::{ApiService, FakeApiService, HttpApiService};
pub use modules::{FakeApiModule, HttpApiModule, UsersModule};
pub use repository::{RepositoryImpl, UserRepository};
pub use settings::{ApiSettings, DemoSettings};
pub use view_model::{UserViewModel, ViewState};
