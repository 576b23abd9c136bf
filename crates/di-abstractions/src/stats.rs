//! 注册表统计信息

/// 注册表统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// 当前注册数量
    pub registrations: usize,
    /// 已缓存的单例数量
    pub cached_singletons: usize,
    /// 解析总次数（包括失败的解析）
    pub resolutions: usize,
    /// 命中单例缓存的次数
    pub singleton_hits: usize,
    /// 提供者调用次数
    pub provider_invocations: usize,
    /// 提供者失败次数
    pub provider_failures: usize,
}

impl RegistryStats {
    /// 单例缓存命中率
    pub fn hit_rate(&self) -> f64 {
        if self.resolutions == 0 {
            0.0
        } else {
            self.singleton_hits as f64 / self.resolutions as f64
        }
    }
}
