//! OSF API v2（JSON:API）客户端。

pub mod impl_raw_json;
pub mod osf_client;
pub mod raw_json;

pub use osf_client::OsfClient;
