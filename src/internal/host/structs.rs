pub mod host_config;
pub mod host_registry;

pub use host_config::HostConfig;
pub use host_registry::HostRegistry;
