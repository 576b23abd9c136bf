//! 注册生命周期

use serde::{Deserialize, Serialize};
use std::fmt;

/// 注册的生命周期策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// 单例模式 - 首次解析时创建，之后每次解析返回同一实例
    Singleton,
    /// 工厂模式 - 每次解析都调用提供者创建新实例
    #[default]
    Factory,
}

impl Lifetime {
    /// 是否缓存实例
    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Singleton)
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton => f.write_str("singleton"),
            Self::Factory => f.write_str("factory"),
        }
    }
}
