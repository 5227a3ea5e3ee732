//! 获取过程中的错误类型，任何一个都会终止整个进度流。

use std::path::PathBuf;

use thiserror::Error;

use crate::internal::remote::structs::NodeKind;

#[derive(Debug, Error)]
pub enum FetchError {
    /// 项目、存储或路径段在远程不存在
    #[error("远程资源不存在: {0}")]
    NotFound(String),

    /// 远程名称包含路径分隔符，视为远程数据损坏
    #[error("{kind}.name cannot include path separators: {name}")]
    InvalidName { kind: NodeKind, name: String },

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("状态异常 {status} ({url}): {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    #[error("响应解析失败 {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("地址格式错误: {0}")]
    InvalidUrl(String),

    #[error("访问令牌不是合法的请求头")]
    InvalidToken,

    #[error("远程响应缺少链接: {0}")]
    MissingLink(String),

    #[error("创建目录失败 {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("创建文件失败 {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("写入文件失败: {0}")]
    Sink(std::io::Error),

    #[error("创建异步运行时失败: {0}")]
    Runtime(std::io::Error),

    /// 生产端在发出结束标记前消失（如线程 panic）
    #[error("获取任务意外中断")]
    Interrupted,
}
