//! 注册表构建器

use crate::logging::{init_logging, LoggingConfig};
use crate::module::{FnModule, RegistryModule};
use crate::settings::LocatorSettings;
use locator_abstractions::{RegistryOptions, Requirements, ServiceRegistry};
use locator_common::{InfrastructureResult, RegistryResult};
use locator_registry::ServiceRegistryImpl;
use tracing::{debug, error, info};

/// 注册表构建器
///
/// 使用建造者模式在启动阶段完成全部注册：按添加顺序应用模块，
/// 然后一次性验证所有必需能力都已注册。
pub struct RegistryBuilder {
    /// 注册表配置
    options: RegistryOptions,
    /// 注册模块列表
    modules: Vec<Box<dyn RegistryModule>>,
    /// 额外的必需能力
    requirements: Requirements,
    /// 是否启用日志初始化
    logging_enabled: bool,
    /// 日志配置
    logging_config: LoggingConfig,
}

impl RegistryBuilder {
    /// 创建新的注册表构建器
    pub fn new() -> Self {
        Self {
            options: RegistryOptions::default(),
            modules: Vec::new(),
            requirements: Requirements::new(),
            logging_enabled: false, // 默认不启用日志初始化
            logging_config: LoggingConfig::default(),
        }
    }

    /// 应用加载好的设置，同时启用日志初始化
    pub fn with_settings(mut self, settings: &LocatorSettings) -> InfrastructureResult<Self> {
        self.options = settings.registry.clone();
        self.logging_config = LoggingConfig::from_settings(&settings.logging)?;
        self.logging_enabled = true;
        Ok(self)
    }

    /// 设置注册表配置
    pub fn with_options(mut self, options: RegistryOptions) -> Self {
        self.options = options;
        self
    }

    /// 使用严格模式
    pub fn strict(self) -> Self {
        self.with_options(RegistryOptions::strict())
    }

    /// 配置日志
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging_config = config;
        self.logging_enabled = true;
        self
    }

    /// 添加注册模块
    pub fn add_module<M: RegistryModule + 'static>(mut self, module: M) -> Self {
        debug!("添加注册模块: {}", module.name());
        self.modules.push(Box::new(module));
        self
    }

    /// 以闭包形式添加注册模块
    pub fn add_fn_module<F>(self, name: impl Into<String>, register_fn: F) -> Self
    where
        F: Fn(&ServiceRegistryImpl) -> RegistryResult<()> + Send + Sync + 'static,
    {
        self.add_module(FnModule::new(name, register_fn))
    }

    /// 声明必需的能力
    pub fn require<T: ?Sized + 'static>(mut self) -> Self {
        self.requirements = self.requirements.require::<T>();
        self
    }

    /// 构建注册表
    pub fn build(self) -> InfrastructureResult<ServiceRegistryImpl> {
        // 只有在明确配置了日志时才初始化日志，避免在测试环境中重复初始化
        if self.logging_enabled {
            init_logging(&self.logging_config)?;
        }

        info!(mode = ?self.options.mode, "开始构建服务注册表");
        let registry = ServiceRegistryImpl::with_options(self.options.clone());
        self.apply(&registry)?;

        info!(registrations = registry.len(), "服务注册表构建完成");
        Ok(registry)
    }

    /// 重置已有的注册表并重新应用所有模块
    ///
    /// 用于测试准备阶段在同一个注册表（例如全局注册表）上换入替身实现。
    /// 注册表沿用自己的配置，构建器中的配置和日志设置被忽略。
    pub fn install_into(self, registry: &ServiceRegistryImpl) -> InfrastructureResult<()> {
        info!("重置并重新安装服务注册表");
        registry.reset();
        self.apply(registry)
    }

    fn apply(&self, registry: &ServiceRegistryImpl) -> InfrastructureResult<()> {
        let mut requirements = self.requirements.clone();

        for module in &self.modules {
            info!("应用注册模块: {}", module.name());
            module.register(registry).map_err(|e| {
                error!("注册模块 {} 失败: {}", module.name(), e);
                e
            })?;
            requirements.extend(module.requirements());
        }

        registry.verify(&requirements).map_err(|e| {
            error!("必需能力验证失败: {}", e);
            e
        })?;

        debug!(required = requirements.len(), "必需能力验证通过");
        Ok(())
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
