//! 进程级注册表

use crate::registry::ServiceRegistryImpl;
use once_cell::sync::Lazy;
use tracing::debug;

/// 全局服务注册表
static GLOBAL_SERVICE_REGISTRY: Lazy<ServiceRegistryImpl> = Lazy::new(|| {
    debug!("创建全局服务注册表");
    ServiceRegistryImpl::new()
});

/// 获取全局服务注册表
///
/// 全局注册表使用宽松模式，首次访问时创建，进程结束时释放。新代码应优先把
/// [`ServiceRegistryImpl`] 句柄显式传给使用者。
pub fn global() -> &'static ServiceRegistryImpl {
    &GLOBAL_SERVICE_REGISTRY
}
