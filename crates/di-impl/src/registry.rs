//! 服务注册表实现

use crate::resolution::ResolutionGuard;
use locator_abstractions::{RegistryOptions, RegistryStats, ServiceRegistry};
use locator_common::{
    Lifetime, ProviderResult, RegistrationDescriptor, RegistryError, RegistryResult, TypeInfo,
};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 类型擦除后的实例，内部总是一个 `Arc<T>`
type ErasedInstance = Box<dyn Any + Send + Sync>;

/// 类型擦除后的提供者
type ErasedProvider =
    Arc<dyn Fn(&ServiceRegistryImpl) -> ProviderResult<ErasedInstance> + Send + Sync>;

/// 单条注册
#[derive(Clone)]
struct Registration {
    /// 注册描述符
    descriptor: RegistrationDescriptor,
    /// 提供者
    provider: ErasedProvider,
    /// 单例实例，工厂注册永远为空
    instance: Arc<OnceCell<ErasedInstance>>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("descriptor", &self.descriptor)
            .field("cached", &self.instance.get().is_some())
            .field("provider", &"<function>")
            .finish()
    }
}

/// 内部统计信息（原子计数器）
#[derive(Default)]
struct InnerStats {
    resolutions: AtomicUsize,
    singleton_hits: AtomicUsize,
    provider_invocations: AtomicUsize,
    provider_failures: AtomicUsize,
}

struct Inner {
    options: RegistryOptions,
    registrations: RwLock<HashMap<TypeId, Registration>>,
    stats: InnerStats,
}

/// 服务注册表
///
/// 克隆得到的是同一个注册表的另一个句柄。读写锁只在访问映射时持有，
/// 提供者运行期间不持有任何锁，因此提供者可以继续解析其它能力。
///
/// 单例由 [`OnceCell`] 保证每条注册只成功构造一次；提供者失败时单元格保持为空，
/// 下一次解析会重新尝试构造。
#[derive(Clone)]
pub struct ServiceRegistryImpl {
    inner: Arc<Inner>,
}

impl ServiceRegistryImpl {
    /// 创建宽松模式的注册表
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    /// 使用指定配置创建注册表
    pub fn with_options(options: RegistryOptions) -> Self {
        debug!(mode = ?options.mode, "创建服务注册表");
        Self {
            inner: Arc::new(Inner {
                options,
                registrations: RwLock::new(HashMap::new()),
                stats: InnerStats::default(),
            }),
        }
    }

    /// 获取注册表配置
    pub fn options(&self) -> &RegistryOptions {
        &self.inner.options
    }

    /// 当前注册数量
    pub fn len(&self) -> usize {
        self.inner.registrations.read().len()
    }

    /// 是否没有任何注册
    pub fn is_empty(&self) -> bool {
        self.inner.registrations.read().is_empty()
    }

    fn insert(&self, registration: Registration) -> RegistryResult<()> {
        let type_id = registration.descriptor.type_info.id;
        let name = registration.descriptor.name().to_string();

        let replaced = {
            let mut registrations = self.inner.registrations.write();
            if registrations.contains_key(&type_id) && self.inner.options.is_strict() {
                warn!("拒绝重复注册: {}", name);
                return Err(RegistryError::duplicate(name));
            }
            registrations.insert(type_id, registration)
        };

        match &replaced {
            Some(previous) => info!(
                previous_id = %previous.descriptor.id,
                "替换已有注册: {}", name
            ),
            None => info!("注册能力: {}", name),
        }
        // 旧注册（及其缓存实例）在锁外析构
        drop(replaced);
        Ok(())
    }

    fn invoke(&self, registration: &Registration) -> RegistryResult<ErasedInstance> {
        self.inner
            .stats
            .provider_invocations
            .fetch_add(1, Ordering::Relaxed);

        (registration.provider)(self).map_err(|source| {
            self.inner
                .stats
                .provider_failures
                .fetch_add(1, Ordering::Relaxed);
            warn!(error = %source, "提供者构造实例失败: {}", registration.descriptor.name());
            RegistryError::Provider(source)
        })
    }
}

impl Default for ServiceRegistryImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceRegistryImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistryImpl")
            .field("options", &self.inner.options)
            .field("registrations", &self.len())
            .finish()
    }
}

fn downcast<T>(instance: &ErasedInstance) -> RegistryResult<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    instance
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| RegistryError::TypeMismatch {
            type_name: std::any::type_name::<T>().to_string(),
        })
}

impl ServiceRegistry for ServiceRegistryImpl {
    fn register_with<T, F>(&self, lifetime: Lifetime, provider: F) -> RegistryResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Self) -> ProviderResult<Arc<T>> + Send + Sync + 'static,
    {
        let erased: ErasedProvider = Arc::new(move |registry: &ServiceRegistryImpl| {
            provider(registry).map(|instance| Box::new(instance) as ErasedInstance)
        });

        self.insert(Registration {
            descriptor: RegistrationDescriptor::new(TypeInfo::of::<T>(), lifetime),
            provider: erased,
            instance: Arc::new(OnceCell::new()),
        })
    }

    fn register_instance<T>(&self, instance: Arc<T>) -> RegistryResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let stored = Arc::clone(&instance);
        let provider: ErasedProvider = Arc::new(move |_: &ServiceRegistryImpl| {
            Ok(Box::new(Arc::clone(&stored)) as ErasedInstance)
        });

        self.insert(Registration {
            descriptor: RegistrationDescriptor::new(TypeInfo::of::<T>(), Lifetime::Singleton)
                .eager(),
            provider,
            instance: Arc::new(OnceCell::with_value(Box::new(instance) as ErasedInstance)),
        })
    }

    fn resolve<T>(&self) -> RegistryResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.inner.stats.resolutions.fetch_add(1, Ordering::Relaxed);

        let registration = self
            .inner
            .registrations
            .read()
            .get(&TypeId::of::<T>())
            .cloned();
        let registration = registration.ok_or_else(|| {
            debug!("解析失败，能力未注册: {}", std::any::type_name::<T>());
            RegistryError::not_registered(std::any::type_name::<T>())
        })?;

        if let Some(instance) = registration.instance.get() {
            self.inner.stats.singleton_hits.fetch_add(1, Ordering::Relaxed);
            debug!("命中单例缓存: {}", registration.descriptor.name());
            return downcast::<T>(instance);
        }

        let _guard = ResolutionGuard::enter(&registration.descriptor.type_info)?;

        match registration.descriptor.lifetime {
            Lifetime::Singleton => {
                let instance = registration
                    .instance
                    .get_or_try_init(|| self.invoke(&registration))?;
                debug!("创建单例: {}", registration.descriptor.name());
                downcast::<T>(instance)
            }
            Lifetime::Factory => {
                let instance = self.invoke(&registration)?;
                debug!("工厂创建新实例: {}", registration.descriptor.name());
                downcast::<T>(&instance)
            }
        }
    }

    fn unregister<T>(&self) -> RegistryResult<bool>
    where
        T: ?Sized + 'static,
    {
        let removed = self
            .inner
            .registrations
            .write()
            .remove(&TypeId::of::<T>());

        match removed {
            Some(registration) => {
                info!("移除注册: {}", registration.descriptor.name());
                Ok(true)
            }
            None if self.inner.options.is_strict() => {
                warn!("移除失败，能力未注册: {}", std::any::type_name::<T>());
                Err(RegistryError::not_registered(std::any::type_name::<T>()))
            }
            None => {
                debug!("能力未注册，忽略移除: {}", std::any::type_name::<T>());
                Ok(false)
            }
        }
    }

    fn reset(&self) {
        let cleared = std::mem::take(&mut *self.inner.registrations.write());
        info!(cleared = cleared.len(), "重置注册表");
    }

    fn is_registered_by_type_id(&self, type_id: TypeId) -> bool {
        self.inner.registrations.read().contains_key(&type_id)
    }

    fn registrations(&self) -> Vec<RegistrationDescriptor> {
        let mut descriptors: Vec<RegistrationDescriptor> = self
            .inner
            .registrations
            .read()
            .values()
            .map(|registration| registration.descriptor.clone())
            .collect();
        descriptors.sort_by(|a, b| a.name().cmp(b.name()));
        descriptors
    }

    fn stats(&self) -> RegistryStats {
        let (registrations, cached_singletons) = {
            let registrations = self.inner.registrations.read();
            let cached = registrations
                .values()
                .filter(|registration| {
                    registration.descriptor.lifetime.is_cached()
                        && registration.instance.get().is_some()
                })
                .count();
            (registrations.len(), cached)
        };

        RegistryStats {
            registrations,
            cached_singletons,
            resolutions: self.inner.stats.resolutions.load(Ordering::Relaxed),
            singleton_hits: self.inner.stats.singleton_hits.load(Ordering::Relaxed),
            provider_invocations: self.inner.stats.provider_invocations.load(Ordering::Relaxed),
            provider_failures: self.inner.stats.provider_failures.load(Ordering::Relaxed),
        }
    }
}
