use std::env;
use std::io::Write;

use tempfile::NamedTempFile;

use crate::internal::constants::{
    DEFAULT_API_URL, DEFAULT_HOSTNAME, OSF_TOKEN_ENV, RDM_HOSTS_ENV, RDM_HOSTS_JSON_ENV,
};
use crate::internal::host::error::ConfigError;
use crate::internal::host::structs::{HostConfig, HostRegistry};
use crate::internal::remote::osf::OsfClient;
use crate::tests::lock_env;

const TWO_HOSTS: &str = r#"[
    {"hostname": ["https://rdm.example.org/", "https://rdm-alt.example.org/"], "api": "https://api.rdm.example.org/v2/"},
    {"hostname": ["https://private.example.org/"], "api": "https://api.private.example.org/v2", "token": "secret-token"}
]"#;

fn write_hosts_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn builtin_has_single_default_host() {
    let registry = HostRegistry::from_sources(None, None).unwrap();
    assert_eq!(registry, HostRegistry::builtin());
    assert_eq!(registry.hosts().len(), 1);
    assert_eq!(registry.hosts()[0].hostnames, vec![DEFAULT_HOSTNAME.to_string()]);
    assert_eq!(registry.hosts()[0].api_base_url, DEFAULT_API_URL);
    assert!(registry.hosts()[0].token.is_none());
}

#[test]
fn inline_json_replaces_builtin() {
    let registry = HostRegistry::from_sources(None, Some(TWO_HOSTS)).unwrap();
    assert_eq!(registry.hosts().len(), 2);
    assert_eq!(registry.hosts()[1].token.as_deref(), Some("secret-token"));
    assert!(registry.find_host(DEFAULT_HOSTNAME).is_none());
    assert_eq!(
        registry.find_host("https://rdm-alt.example.org/abc").map(|h| h.api_url()),
        Some("https://api.rdm.example.org/v2")
    );
}

#[test]
fn file_is_loaded_and_inline_wins_over_file() {
    let file = write_hosts_file(TWO_HOSTS);

    let from_file = HostRegistry::from_sources(Some(file.path()), None).unwrap();
    assert_eq!(from_file.hosts().len(), 2);

    let inline = r#"[{"hostname": ["https://inline.example.org/"], "api": "https://api.inline.example.org/v2/"}]"#;
    let both = HostRegistry::from_sources(Some(file.path()), Some(inline)).unwrap();
    assert_eq!(both.hosts().len(), 1);
    assert_eq!(both.hosts()[0].api_base_url, "https://api.inline.example.org/v2/");
}

#[test]
fn broken_file_fails_even_when_inline_is_valid() {
    let file = write_hosts_file("not json");
    let inline = r#"[{"hostname": ["https://inline.example.org/"], "api": "https://a/"}]"#;
    let err = HostRegistry::from_sources(Some(file.path()), Some(inline)).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "{err:?}");
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hosts.json");
    let err = HostRegistry::from_sources(Some(&path), None).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }), "{err:?}");
}

#[test]
fn malformed_hosts_fail_fast() {
    let cases: Vec<(&str, fn(&ConfigError) -> bool)> = vec![
        (r#"{"hostname": ["https://a/"], "api": "https://b/"}"#, |e| {
            matches!(e, ConfigError::NotAList(_))
        }),
        (r#"["https://a/"]"#, |e| matches!(e, ConfigError::NotAnObject(_))),
        (r#"[{"api": "https://b/"}]"#, |e| {
            matches!(e, ConfigError::MissingHostname(_))
        }),
        (r#"[{"hostname": "https://a/", "api": "https://b/"}]"#, |e| {
            matches!(e, ConfigError::HostnameNotList(_))
        }),
        (r#"[{"hostname": ["https://a/", 1], "api": "https://b/"}]"#, |e| {
            matches!(e, ConfigError::HostnameNotList(_))
        }),
        (r#"[{"hostname": [], "api": "https://b/"}]"#, |e| {
            matches!(e, ConfigError::EmptyHostnames(_))
        }),
        (r#"[{"hostname": ["https://a/"]}]"#, |e| {
            matches!(e, ConfigError::MissingApi(_))
        }),
        (r#"[{"hostname": ["https://a/"], "api": ""}]"#, |e| {
            matches!(e, ConfigError::InvalidApi(_))
        }),
        (r#"[{"hostname": ["https://a/"], "api": 3}]"#, |e| {
            matches!(e, ConfigError::InvalidApi(_))
        }),
        (r#"[{"hostname": ["https://a/"], "api": "https://b/", "token": 42}]"#, |e| {
            matches!(e, ConfigError::InvalidToken(_))
        }),
    ];

    for (json, expected) in cases {
        let err = HostRegistry::from_json_str(json).unwrap_err();
        assert!(expected(&err), "{json} -> {err:?}");
    }
}

#[test]
fn missing_hostname_message_names_the_host() {
    let err = HostRegistry::from_json_str(r#"[{"api": "https://b/"}]"#).unwrap_err();
    assert!(err.to_string().starts_with("No hostname: "));
    assert!(err.to_string().contains("https://b/"));
}

#[test]
fn host_token_takes_precedence_and_is_hidden_in_debug() {
    let host = HostConfig::new(
        vec!["https://a/".to_string()],
        "https://b/",
        Some("secret-token".to_string()),
    )
    .unwrap();

    assert_eq!(host.resolve_token().as_deref(), Some("secret-token"));
    let debug = format!("{host:?}");
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("<hidden>"));
}

#[test]
fn host_config_constructor_validates() {
    assert!(matches!(
        HostConfig::new(vec![], "https://b/", None),
        Err(ConfigError::EmptyHostnames(_))
    ));
    assert!(matches!(
        HostConfig::new(vec!["https://a/".to_string()], " ", None),
        Err(ConfigError::InvalidApi(_))
    ));
}

fn host_with_token(token: Option<&str>) -> HostConfig {
    HostConfig::new(
        vec!["https://a/".to_string()],
        "https://b/",
        token.map(str::to_string),
    )
    .unwrap()
}

#[test]
fn token_falls_back_to_env_then_anonymous() {
    let fallback = || Some("env-token".to_string());

    assert_eq!(
        host_with_token(Some("host-token")).resolve_token_with(fallback()).as_deref(),
        Some("host-token")
    );
    assert_eq!(
        host_with_token(None).resolve_token_with(fallback()).as_deref(),
        Some("env-token")
    );
    // 空的主机 token 不算数
    assert_eq!(
        host_with_token(Some("")).resolve_token_with(fallback()).as_deref(),
        Some("env-token")
    );
    assert_eq!(host_with_token(Some("")).resolve_token_with(Some(String::new())), None);
    assert_eq!(host_with_token(None).resolve_token_with(None), None);
}

#[test]
fn osf_token_env_is_used_by_connect() {
    let _guard = lock_env();

    // 持有 lock_env 期间没有其他测试读写环境变量
    unsafe { env::set_var(OSF_TOKEN_ENV, "env-token") };
    let resolved = host_with_token(None).resolve_token();
    let client = OsfClient::connect(&host_with_token(Some(""))).unwrap();
    unsafe { env::remove_var(OSF_TOKEN_ENV) };

    assert_eq!(resolved.as_deref(), Some("env-token"));
    assert!(!client.auth().is_anonymous());

    let anonymous = OsfClient::connect(&host_with_token(None)).unwrap();
    assert!(anonymous.auth().is_anonymous());
    assert_eq!(anonymous.auth().fingerprint_prefix(), "anonymous");
}

#[cfg(unix)]
#[test]
fn non_utf8_inline_hosts_fail_fast() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _guard = lock_env();

    unsafe {
        env::remove_var(RDM_HOSTS_ENV);
        env::set_var(RDM_HOSTS_JSON_ENV, OsStr::from_bytes(b"[\xff]"));
    }
    let result = HostRegistry::from_env();
    unsafe { env::remove_var(RDM_HOSTS_JSON_ENV) };

    assert!(
        matches!(result, Err(ConfigError::NotUnicode(name)) if name == RDM_HOSTS_JSON_ENV),
        "{result:?}"
    );
}
