//! 源地址识别：把 RDM URL 解析成 [`structs::FetchSpec`]。

pub mod functions;
pub mod structs;
