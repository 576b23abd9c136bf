//! 注册表配置

use serde::{Deserialize, Serialize};

/// 重复注册的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationMode {
    /// 后注册的覆盖先注册的
    #[default]
    Permissive,
    /// 重复注册返回错误，移除不存在的注册也返回错误
    Strict,
}

/// 注册表配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// 重复注册的处理方式
    pub mode: RegistrationMode,
}

impl RegistryOptions {
    /// 严格模式配置
    pub fn strict() -> Self {
        Self {
            mode: RegistrationMode::Strict,
        }
    }

    /// 是否为严格模式
    pub fn is_strict(&self) -> bool {
        self.mode == RegistrationMode::Strict
    }
}
