//! 用户列表视图模型

use crate::repository::UserRepository;
use locator_abstractions::ServiceRegistry;
use locator_common::RegistryResult;
use locator_registry::ServiceRegistryImpl;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// 视图状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// 尚未加载
    #[default]
    Idle,
    /// 加载中
    Loading,
    /// 已加载
    Loaded(Vec<String>),
    /// 加载失败
    Failed(String),
}

/// 用户列表视图模型
pub struct UserViewModel {
    repository: Arc<dyn UserRepository>,
    state: RwLock<ViewState>,
}

impl UserViewModel {
    /// 使用给定仓储创建视图模型
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            state: RwLock::new(ViewState::Idle),
        }
    }

    /// 从注册表解析仓储并创建视图模型
    pub fn from_registry(registry: &ServiceRegistryImpl) -> RegistryResult<Self> {
        Ok(Self::new(registry.resolve::<dyn UserRepository>()?))
    }

    /// 当前状态
    pub fn state(&self) -> ViewState {
        self.state.read().clone()
    }

    /// 已加载的用户，未加载时为空
    pub fn users(&self) -> Vec<String> {
        match &*self.state.read() {
            ViewState::Loaded(users) => users.clone(),
            _ => Vec::new(),
        }
    }

    /// 加载用户列表
    pub async fn load_users(&self) -> anyhow::Result<Vec<String>> {
        *self.state.write() = ViewState::Loading;

        match self.repository.fetch_users().await {
            Ok(users) => {
                info!(count = users.len(), "用户列表加载完成");
                *self.state.write() = ViewState::Loaded(users.clone());
                Ok(users)
            }
            Err(e) => {
                warn!(error = %e, "用户列表加载失败");
                *self.state.write() = ViewState::Failed(e.to_string());
                Err(e)
            }
        }
    }
}
