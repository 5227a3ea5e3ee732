use tempfile::tempdir;

use crate::internal::host::structs::{HostConfig, HostRegistry};
use crate::internal::provider::structs::RdmProvider;
use crate::internal::provider::traits::ContentProvider;
use crate::tests::load_live_account_optional;

/// 真实 RDM 服务器；未配置 `src/tests/env/rdm.env` 时跳过
#[test]
fn live_fetch_test() {
    let account = match load_live_account_optional() {
        Some(account) => account,
        None => return,
    };

    let host = HostConfig::new(vec![account.source.clone()], &account.api, account.token.clone())
        .unwrap();
    let provider = RdmProvider::with_registry(HostRegistry::new(vec![host]));
    let out = tempdir().unwrap();

    let spec = provider.detect(&account.source, None).unwrap();
    let mut fetched = 0;
    for line in provider.fetch(&spec, out.path()) {
        let line = line.unwrap();
        print!("{line}");
        if line.starts_with("Fetch:") {
            fetched += 1;
        }
    }
    println!("共获取 {} 个文件", fetched);
}
