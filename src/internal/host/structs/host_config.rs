use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::internal::constants::OSF_TOKEN_ENV;
use crate::internal::host::error::ConfigError;

/// 单个 RDM 主机配置
///
/// JSON 形式：`{"hostname": ["https://..."], "api": "https://api.../v2/", "token": "..."}`
///
/// 不变量：`hostnames` 非空、`api_base_url` 非空，只能通过 [`HostConfig::new`]
/// 或 [`HostConfig::from_value`] 构造时校验。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// 源地址前缀列表，字面前缀匹配
    #[serde(rename = "hostname")]
    pub hostnames: Vec<String>,
    /// OSF 兼容 API 的基础地址
    #[serde(rename = "api")]
    pub api_base_url: String,
    /// 主机专属访问令牌
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl HostConfig {
    pub fn new(
        hostnames: Vec<String>,
        api_base_url: &str,
        token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            hostnames,
            api_base_url: api_base_url.to_string(),
            token,
        };
        config.validate()?;
        Ok(config)
    }

    /// 从一个 JSON 值构造，先做结构校验再交给 serde
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let raw = value.to_string();
        let object = value
            .as_object()
            .ok_or_else(|| ConfigError::NotAnObject(raw.clone()))?;

        let hostname = object
            .get("hostname")
            .ok_or_else(|| ConfigError::MissingHostname(raw.clone()))?;
        let is_string_list = hostname
            .as_array()
            .map(|items| items.iter().all(Value::is_string))
            .unwrap_or(false);
        if !is_string_list {
            return Err(ConfigError::HostnameNotList(hostname.to_string()));
        }

        let api = object
            .get("api")
            .ok_or_else(|| ConfigError::MissingApi(raw.clone()))?;
        if !api.is_string() {
            return Err(ConfigError::InvalidApi(raw));
        }

        if let Some(token) = object.get("token") {
            if !token.is_string() && !token.is_null() {
                return Err(ConfigError::InvalidToken(raw));
            }
        }

        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hostnames.is_empty() || self.hostnames.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyHostnames(self.api_base_url.clone()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidApi(format!("{:?}", self.hostnames)));
        }
        Ok(())
    }

    /// 源地址是否以任一 hostname 开头
    pub fn matches(&self, source: &str) -> bool {
        self.hostnames.iter().any(|prefix| source.starts_with(prefix.as_str()))
    }

    /// 去掉一个尾部 `/` 的 API 地址，用于进度输出和客户端
    pub fn api_url(&self) -> &str {
        self.api_base_url
            .strip_suffix('/')
            .unwrap_or(&self.api_base_url)
    }

    /// 访问令牌：主机 token > 环境变量 `OSF_TOKEN` > 匿名
    pub fn resolve_token(&self) -> Option<String> {
        self.resolve_token_with(std::env::var(OSF_TOKEN_ENV).ok())
    }

    /// 空字符串视为未设置
    pub fn resolve_token_with(&self, fallback: Option<String>) -> Option<String> {
        self.token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| fallback.filter(|t| !t.is_empty()))
    }
}

/// 防止debug泄漏token
impl fmt::Debug for HostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostConfig")
            .field("hostnames", &self.hostnames)
            .field("api_base_url", &self.api_base_url)
            .field("token", &self.token.as_ref().map(|_| "<hidden>"))
            .finish()
    }
}
