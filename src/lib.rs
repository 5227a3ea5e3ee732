/// 内部模块
mod internal;

#[cfg(test)]
mod tests;

/// 核心入口
pub use internal::provider::structs::rdm_provider::RdmProvider;
pub use internal::provider::traits::content_provider::ContentProvider;

pub mod host {
    use crate::internal;
    pub use internal::constants::*;
    pub use internal::host::error::ConfigError;
    pub use internal::host::structs::host_config::HostConfig;
    pub use internal::host::structs::host_registry::HostRegistry;
}

pub mod locator {
    use crate::internal;
    pub use internal::locator::functions::detect::detect;
    pub use internal::locator::structs::fetch_spec::FetchSpec;
}

/// 远程存储模型与客户端，不限制在 provider 中使用，以防有人自己要遍历
pub mod remote {
    use crate::internal;
    pub use internal::remote::auth::structs::rdm_auth::RdmAuth;
    pub use internal::remote::osf::osf_client::OsfClient;
    pub use internal::remote::structs::remote_node::*;
    pub use internal::remote::traits::remote_storage_client::RemoteStorageClient;

    pub mod raw_json {
        pub use crate::internal::remote::osf::raw_json::*;
    }
}

pub mod fetch {
    use crate::internal;
    pub use internal::fetch::functions::fetch_tree::fetch_tree;
    pub use internal::fetch::functions::spawn_fetch::{drive_fetch, spawn_fetch};
    pub use internal::fetch::structs::fetch_error::FetchError;
    pub use internal::fetch::structs::fetch_lines::FetchLines;
    pub use internal::fetch::structs::fetch_message::FetchMessage;
    pub use internal::fetch::traits::line_sink::LineSink;
    pub use internal::states::handoff_queue::{HandoffConsumer, HandoffQueue};
}

pub mod logging {
    pub use crate::internal::logging::*;
}
