use std::path::Path;
use std::sync::Arc;

use crate::internal::fetch::functions::spawn_fetch;
use crate::internal::fetch::structs::{FetchError, FetchLines};
use crate::internal::host::error::ConfigError;
use crate::internal::host::structs::HostRegistry;
use crate::internal::locator::functions::detect;
use crate::internal::locator::structs::FetchSpec;
use crate::internal::provider::traits::ContentProvider;
use crate::internal::remote::osf::OsfClient;

/// GakuNin RDM 内容提供者
///
/// 主机列表在构造时加载并校验，之后只读，可在多个实例间共享。
#[derive(Debug, Clone)]
pub struct RdmProvider {
    registry: Arc<HostRegistry>,
}

impl RdmProvider {
    /// 按 `RDM_HOSTS` / `RDM_HOSTS_JSON` 加载主机列表，配置错误立即失败
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::with_registry(HostRegistry::from_env()?))
    }

    pub fn with_registry(registry: HostRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn hosts(&self) -> &HostRegistry {
        &self.registry
    }
}

impl ContentProvider for RdmProvider {
    type Spec = FetchSpec;
    type Lines = FetchLines;
    type Error = FetchError;

    fn detect(&self, source: &str, git_ref: Option<&str>) -> Option<FetchSpec> {
        detect(&self.registry, source, git_ref)
    }

    fn fetch(&self, spec: &FetchSpec, output_dir: &Path) -> FetchLines {
        spawn_fetch(OsfClient::connect, spec.clone(), output_dir)
    }

    fn content_id(&self, spec: &FetchSpec) -> String {
        spec.content_id()
    }
}
