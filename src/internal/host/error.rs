//! 主机配置相关错误类型。

use std::path::PathBuf;

use thiserror::Error;

/// 构造主机列表时的配置错误，出现即视为 provider 不可用。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取主机配置文件失败 {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("环境变量 {0} 不是合法的 UTF-8")]
    NotUnicode(&'static str),

    #[error("主机配置 JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("主机配置必须是 JSON 数组: {0}")]
    NotAList(String),

    #[error("主机配置项必须是对象: {0}")]
    NotAnObject(String),

    #[error("No hostname: {0}")]
    MissingHostname(String),

    #[error("hostname should be list of string: {0}")]
    HostnameNotList(String),

    #[error("hostname 列表为空: {0}")]
    EmptyHostnames(String),

    #[error("No api: {0}")]
    MissingApi(String),

    #[error("api 必须是非空字符串: {0}")]
    InvalidApi(String),

    #[error("token 必须是字符串: {0}")]
    InvalidToken(String),
}
