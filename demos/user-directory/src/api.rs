//! 用户接口

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// 用户接口
#[async_trait]
pub trait ApiService: Send + Sync {
    /// 获取用户名列表
    async fn fetch_users(&self) -> anyhow::Result<Vec<String>>;
}

/// 返回固定用户列表的测试替身
#[derive(Debug, Clone)]
pub struct FakeApiService {
    users: Vec<String>,
}

impl FakeApiService {
    /// 使用给定用户名列表创建替身
    pub fn new<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            users: users.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for FakeApiService {
    fn default() -> Self {
        Self::new(["MockUser1", "MockUser2"])
    }
}

#[async_trait]
impl ApiService for FakeApiService {
    async fn fetch_users(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.users.clone())
    }
}

#[derive(Debug, Deserialize)]
struct UserDto {
    name: String,
}

/// 通过 HTTP 获取用户的实现
#[derive(Debug, Clone)]
pub struct HttpApiService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiService {
    /// 创建 HTTP 用户接口
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ApiService for HttpApiService {
    async fn fetch_users(&self) -> anyhow::Result<Vec<String>> {
        let url = self.users_url();
        debug!("请求用户列表: {}", url);

        let users: Vec<UserDto> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(users.into_iter().map(|user| user.name).collect())
    }
}
