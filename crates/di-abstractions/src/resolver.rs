//! 解析上下文
//!
//! 记录当前线程正在解析的能力链，用于检测循环依赖

use locator_common::{RegistryError, RegistryResult, TypeInfo};

/// 解析上下文
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// 当前解析链，用于检测循环依赖
    resolution_chain: Vec<TypeInfo>,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加类型到解析链
    ///
    /// 类型已经在链上时返回 [`RegistryError::CircularDependency`]，链保持不变。
    pub fn push_type(&mut self, type_info: &TypeInfo) -> RegistryResult<()> {
        if let Some(start) = self
            .resolution_chain
            .iter()
            .position(|entry| entry.id == type_info.id)
        {
            let chain = self.resolution_chain[start..]
                .iter()
                .chain(std::iter::once(type_info))
                .map(TypeInfo::short_name)
                .collect::<Vec<_>>()
                .join(" -> ");

            return Err(RegistryError::CircularDependency {
                dependency_chain: chain,
            });
        }
        self.resolution_chain.push(type_info.clone());
        Ok(())
    }

    /// 从解析链中移除最近的类型
    pub fn pop_type(&mut self) -> Option<TypeInfo> {
        self.resolution_chain.pop()
    }

    /// 当前解析深度
    pub fn depth(&self) -> usize {
        self.resolution_chain.len()
    }
}
