//! 远程存储领域模块：项目/存储/文件夹/文件模型、客户端 trait 与 OSF API v2 实现。

pub mod auth;
pub mod osf;
pub mod structs;
pub mod traits;
