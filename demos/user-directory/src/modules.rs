//! 注册模块
//!
//! 生产启动代码和测试使用同一个 [`UsersModule`]，只替换提供 [`ApiService`] 的模块。

use crate::api::{ApiService, FakeApiService, HttpApiService};
use crate::repository::{RepositoryImpl, UserRepository};
use crate::settings::ApiSettings;
use crate::view_model::UserViewModel;
use locator_abstractions::{Requirements, ServiceRegistry};
use locator_common::{Lifetime, RegistryResult};
use locator_composition::RegistryModule;
use locator_registry::ServiceRegistryImpl;
use std::sync::Arc;

/// 以单例注册 [`HttpApiService`]
#[derive(Debug, Clone)]
pub struct HttpApiModule {
    settings: ApiSettings,
}

impl HttpApiModule {
    /// 使用给定的接口设置创建模块
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }
}

impl RegistryModule for HttpApiModule {
    fn name(&self) -> &str {
        "http-api"
    }

    fn register(&self, registry: &ServiceRegistryImpl) -> RegistryResult<()> {
        let settings = self.settings.clone();
        registry.register_singleton::<dyn ApiService, _>(move || {
            let api = HttpApiService::new(settings.base_url.clone(), settings.timeout())?;
            Ok(Arc::new(api) as Arc<dyn ApiService>)
        })
    }
}

/// 以单例注册 [`FakeApiService`]
#[derive(Debug, Clone, Default)]
pub struct FakeApiModule {
    api: FakeApiService,
}

impl FakeApiModule {
    /// 使用给定的替身创建模块
    pub fn new(api: FakeApiService) -> Self {
        Self { api }
    }
}

impl RegistryModule for FakeApiModule {
    fn name(&self) -> &str {
        "fake-api"
    }

    fn register(&self, registry: &ServiceRegistryImpl) -> RegistryResult<()> {
        let api = self.api.clone();
        registry.register_singleton::<dyn ApiService, _>(move || {
            Ok(Arc::new(api.clone()) as Arc<dyn ApiService>)
        })
    }
}

/// 注册用户仓储和视图模型，两者都是工厂
#[derive(Debug, Clone, Copy, Default)]
pub struct UsersModule;

impl RegistryModule for UsersModule {
    fn name(&self) -> &str {
        "users"
    }

    fn register(&self, registry: &ServiceRegistryImpl) -> RegistryResult<()> {
        registry.register_with::<dyn UserRepository, _>(Lifetime::Factory, |registry| {
            let api = registry.resolve::<dyn ApiService>()?;
            Ok(Arc::new(RepositoryImpl::new(api)) as Arc<dyn UserRepository>)
        })?;

        registry.register_with::<UserViewModel, _>(Lifetime::Factory, |registry| {
            Ok(Arc::new(UserViewModel::from_registry(registry)?))
        })
    }

    fn requirements(&self) -> Requirements {
        Requirements::new().require::<dyn ApiService>()
    }
}
