//! 注册模块
//!
//! 一个模块就是一组相关的注册。启动代码按顺序应用生产模块，测试代码在
//! 重置注册表后应用替身模块。

use locator_abstractions::Requirements;
use locator_common::RegistryResult;
use locator_registry::ServiceRegistryImpl;
use std::fmt;

/// 注册模块接口
pub trait RegistryModule: Send + Sync {
    /// 模块名称
    fn name(&self) -> &str;

    /// 向注册表注册本模块提供的能力
    fn register(&self, registry: &ServiceRegistryImpl) -> RegistryResult<()>;

    /// 本模块依赖、但由其它模块提供的能力
    fn requirements(&self) -> Requirements {
        Requirements::new()
    }
}

/// 基于闭包的注册模块
pub struct FnModule<F> {
    name: String,
    register_fn: F,
    requirements: Requirements,
}

impl<F> FnModule<F>
where
    F: Fn(&ServiceRegistryImpl) -> RegistryResult<()> + Send + Sync,
{
    /// 创建新的闭包模块
    pub fn new(name: impl Into<String>, register_fn: F) -> Self {
        Self {
            name: name.into(),
            register_fn,
            requirements: Requirements::new(),
        }
    }

    /// 声明依赖的能力
    pub fn require<T: ?Sized + 'static>(mut self) -> Self {
        self.requirements = self.requirements.require::<T>();
        self
    }
}

impl<F> fmt::Debug for FnModule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModule")
            .field("name", &self.name)
            .field("requirements", &self.requirements.len())
            .finish()
    }
}

impl<F> RegistryModule for FnModule<F>
where
    F: Fn(&ServiceRegistryImpl) -> RegistryResult<()> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&self, registry: &ServiceRegistryImpl) -> RegistryResult<()> {
        (self.register_fn)(registry)
    }

    fn requirements(&self) -> Requirements {
        self.requirements.clone()
    }
}
