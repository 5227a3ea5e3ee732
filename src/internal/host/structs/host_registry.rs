use std::env;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::internal::constants::{
    DEFAULT_API_URL, DEFAULT_HOSTNAME, RDM_HOSTS_ENV, RDM_HOSTS_JSON_ENV,
};
use crate::internal::host::error::ConfigError;

use super::host_config::HostConfig;

/// 可信主机列表
///
/// 构造后只读，顺序即匹配优先级（先匹配先得）。
/// 加载顺序：内置默认 -> `RDM_HOSTS` 文件 -> `RDM_HOSTS_JSON` 内联，后者整体覆盖前者。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRegistry {
    hosts: Vec<HostConfig>,
}

impl HostRegistry {
    /// 内置的单个默认主机
    pub fn builtin() -> Self {
        Self {
            hosts: vec![HostConfig {
                hostnames: vec![DEFAULT_HOSTNAME.to_string()],
                api_base_url: DEFAULT_API_URL.to_string(),
                token: None,
            }],
        }
    }

    pub fn new(hosts: Vec<HostConfig>) -> Self {
        Self { hosts }
    }

    /// 从环境变量加载
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = env::var_os(RDM_HOSTS_ENV).map(PathBuf::from);
        let inline = match env::var(RDM_HOSTS_JSON_ENV) {
            Ok(json) => Some(json),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode(RDM_HOSTS_JSON_ENV));
            }
        };
        Self::from_sources(file.as_deref(), inline.as_deref())
    }

    /// 按优先级合并三层来源；指定了文件时即便被内联覆盖也会读取并校验
    pub fn from_sources(
        file: Option<&Path>,
        inline: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut registry = Self::builtin();

        if let Some(path) = file {
            registry = Self::from_file(path)?;
            tracing::debug!(path = %path.display(), "loaded RDM hosts from file");
        }

        if let Some(json) = inline {
            registry = Self::from_json_str(json)?;
            tracing::debug!("loaded RDM hosts from inline JSON");
        }

        Ok(registry)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_home(path);
        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::ReadFile { path, source })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        let items = match value {
            Value::Array(items) => items,
            other => return Err(ConfigError::NotAList(other.to_string())),
        };

        let hosts = items
            .into_iter()
            .map(HostConfig::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { hosts })
    }

    pub fn hosts(&self) -> &[HostConfig] {
        &self.hosts
    }

    /// 按列表顺序返回第一个匹配源地址的主机
    pub fn find_host(&self, source: &str) -> Option<&HostConfig> {
        self.hosts.iter().find(|host| host.matches(source))
    }
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
