//! 示例应用配置

use locator_composition::LocatorSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 用户接口设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// 接口根地址，用户列表位于 `{base_url}/users`
    pub base_url: String,
    /// 请求超时（秒）
    pub timeout_secs: u64,
}

impl ApiSettings {
    /// 请求超时
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            timeout_secs: 10,
        }
    }
}

/// 示例应用配置，嵌入服务定位器设置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    #[serde(flatten)]
    pub locator: LocatorSettings,
    pub api: ApiSettings,
}
