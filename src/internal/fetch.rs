//! 递归获取领域模块：协作式异步遍历 + 面向同步调用方的有序进度流。
//!
//! 对外使用入口为 [`crate::fetch`]，此处仅做模块划分。

pub mod functions;
pub mod structs;
pub mod traits;
