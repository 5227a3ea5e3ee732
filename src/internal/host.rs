//! 主机配置领域模块：可信 RDM 主机列表的加载与校验。

pub mod error;
pub mod structs;
