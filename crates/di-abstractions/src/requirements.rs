//! 必需能力清单

use locator_common::TypeInfo;

/// 启动完成前必须注册的能力清单
///
/// ```
/// use locator_abstractions::Requirements;
///
/// trait ApiService {}
///
/// let requirements = Requirements::new().require::<dyn ApiService>();
/// assert_eq!(requirements.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Requirements {
    types: Vec<TypeInfo>,
}

impl Requirements {
    /// 创建空清单
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加必需的能力，重复添加会被忽略
    pub fn require<T: ?Sized + 'static>(mut self) -> Self {
        self.push(TypeInfo::of::<T>());
        self
    }

    /// 添加类型信息
    pub fn push(&mut self, info: TypeInfo) {
        if !self.types.iter().any(|existing| existing.id == info.id) {
            self.types.push(info);
        }
    }

    /// 合并另一份清单
    pub fn extend(&mut self, other: Requirements) {
        for info in other.types {
            self.push(info);
        }
    }

    /// 按声明顺序遍历必需能力
    pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
        self.types.iter()
    }

    /// 必需能力数量
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// 是否没有声明任何必需能力
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
