//! 用户仓储

use crate::api::ApiService;
use async_trait::async_trait;
use std::sync::Arc;

/// 用户仓储
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 获取用户名列表
    async fn fetch_users(&self) -> anyhow::Result<Vec<String>>;
}

/// 直接委托给 [`ApiService`] 的仓储实现
pub struct RepositoryImpl {
    api: Arc<dyn ApiService>,
}

impl RepositoryImpl {
    /// 使用给定接口创建仓储
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserRepository for RepositoryImpl {
    async fn fetch_users(&self) -> anyhow::Result<Vec<String>> {
        self.api.fetch_users().await
    }
}
