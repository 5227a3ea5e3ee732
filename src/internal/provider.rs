//! 内容提供者：对构建工具暴露 detect / fetch / content_id 三个入口。

pub mod structs;
pub mod traits;
