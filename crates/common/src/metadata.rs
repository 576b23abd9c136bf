//! 元数据定义
//!
//! 提供能力类型和注册的元数据信息

use crate::lifecycle::Lifetime;
use std::any::TypeId;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 完整类型名称（包含模块路径）
    pub name: String,
    /// 类型ID
    pub id: TypeId,
}

impl TypeInfo {
    /// 从类型获取类型信息
    ///
    /// 支持未定长类型，`TypeInfo::of::<dyn ApiService>()` 与具体类型一样有效。
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>().to_string(),
            id: TypeId::of::<T>(),
        }
    }

    /// 获取简短的类型名称（去掉所有模块路径）
    ///
    /// `dyn app::api::ApiService` → `dyn ApiService`，
    /// `alloc::vec::Vec<alloc::string::String>` → `Vec<String>`。
    pub fn short_name(&self) -> String {
        let mut short = String::with_capacity(self.name.len());
        let mut segment = String::new();

        for ch in self.name.chars() {
            if ch.is_alphanumeric() || ch == '_' || ch == ':' {
                segment.push(ch);
            } else {
                short.push_str(last_segment(&segment));
                segment.clear();
                short.push(ch);
            }
        }
        short.push_str(last_segment(&segment));
        short
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// 注册描述符
///
/// 一条注册在某一时刻的只读快照，用于诊断和启动日志。
#[derive(Debug, Clone)]
pub struct RegistrationDescriptor {
    /// 注册ID，每次注册（包括替换）都会生成新的ID
    pub id: uuid::Uuid,
    /// 能力类型
    pub type_info: TypeInfo,
    /// 生命周期
    pub lifetime: Lifetime,
    /// 实例是否在注册时已提供
    pub eager: bool,
    /// 注册时间
    pub registered_at: chrono::DateTime<chrono::Utc>,
}

impl RegistrationDescriptor {
    /// 创建新的注册描述符
    pub fn new(type_info: TypeInfo, lifetime: Lifetime) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            type_info,
            lifetime,
            eager: false,
            registered_at: chrono::Utc::now(),
        }
    }

    /// 标记为预先提供实例的单例
    pub fn eager(mut self) -> Self {
        self.eager = true;
        self
    }

    /// 能力名称
    pub fn name(&self) -> &str {
        &self.type_info.name
    }
}
