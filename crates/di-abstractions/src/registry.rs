//! 服务注册表抽象接口

use crate::requirements::Requirements;
use crate::stats::RegistryStats;
use locator_common::{
    Lifetime, ProviderResult, RegistrationDescriptor, RegistryError, RegistryResult,
};
use std::any::TypeId;
use std::sync::Arc;

/// 服务注册表 trait
///
/// 能力是任意 `T: ?Sized + Send + Sync + 'static` 类型，通常是一个
/// `dyn Trait`；解析结果总是以 `Arc<T>` 交给调用者。
///
/// 所有方法都只需要 `&self`，实现者需要自己保证内部状态的同步。
pub trait ServiceRegistry: Send + Sync {
    /// 注册能力，提供者可以通过传入的注册表解析其它协作者
    ///
    /// 宽松模式下重复注册会替换旧注册（包括已缓存的单例），
    /// 严格模式下返回 [`RegistryError::DuplicateRegistration`]。
    fn register_with<T, F>(&self, lifetime: Lifetime, provider: F) -> RegistryResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Self) -> ProviderResult<Arc<T>> + Send + Sync + 'static;

    /// 注册已经构造好的单例实例
    fn register_instance<T>(&self, instance: Arc<T>) -> RegistryResult<()>
    where
        T: ?Sized + Send + Sync + 'static;

    /// 解析能力
    ///
    /// 未注册时返回 [`RegistryError::NotRegistered`]；提供者失败时错误原样返回，
    /// 单例不会缓存失败结果。
    fn resolve<T>(&self) -> RegistryResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static;

    /// 移除单个注册及其缓存实例
    ///
    /// 返回是否确实移除了注册。严格模式下移除不存在的能力返回
    /// [`RegistryError::NotRegistered`]。
    fn unregister<T>(&self) -> RegistryResult<bool>
    where
        T: ?Sized + 'static;

    /// 清空所有注册和缓存的单例，可重复调用
    fn reset(&self);

    /// 检查是否已注册（通过 TypeId）
    fn is_registered_by_type_id(&self, type_id: TypeId) -> bool;

    /// 获取所有注册的描述符，按类型名称排序
    fn registrations(&self) -> Vec<RegistrationDescriptor>;

    /// 获取统计信息
    fn stats(&self) -> RegistryStats;

    /// 注册零参数提供者
    fn register<T, F>(&self, lifetime: Lifetime, provider: F) -> RegistryResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn() -> ProviderResult<Arc<T>> + Send + Sync + 'static,
    {
        self.register_with(lifetime, move |_: &Self| provider())
    }

    /// 注册懒加载单例
    fn register_singleton<T, F>(&self, provider: F) -> RegistryResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn() -> ProviderResult<Arc<T>> + Send + Sync + 'static,
    {
        self.register(Lifetime::Singleton, provider)
    }

    /// 注册工厂
    fn register_factory<T, F>(&self, provider: F) -> RegistryResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn() -> ProviderResult<Arc<T>> + Send + Sync + 'static,
    {
        self.register(Lifetime::Factory, provider)
    }

    /// 检查能力是否已注册
    fn is_registered<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.is_registered_by_type_id(TypeId::of::<T>())
    }

    /// 验证必需的能力都已注册
    ///
    /// 一次性报告所有缺失的能力，而不是在第一次解析时才失败。
    fn verify(&self, requirements: &Requirements) -> RegistryResult<()> {
        let missing: Vec<String> = requirements
            .iter()
            .filter(|info| !self.is_registered_by_type_id(info.id))
            .map(|info| info.name.clone())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::MissingRegistrations {
                type_names: missing,
            })
        }
    }
}
