use percent_encoding::percent_decode_str;
use url::Url;
use uuid::Uuid;

use crate::internal::constants::{HEAD_REF, LEGACY_FILES_SEGMENT};
use crate::internal::host::structs::HostRegistry;
use crate::internal::locator::structs::FetchSpec;

/// 识别源地址
///
/// 按主机列表顺序做前缀匹配，第一个命中的主机生效；都不匹配时返回 `None`，
/// 由调用方继续尝试其他 provider。
///
/// - `https://host/abc12` -> 项目 `abc12`，子路径为空
/// - `https://host/abc12/files/osfstorage/dir` -> 项目 `abc12`，子路径 `osfstorage/dir`
pub fn detect(
    registry: &HostRegistry,
    source: &str,
    git_ref: Option<&str>,
) -> Option<FetchSpec> {
    let host = registry.find_host(source)?;

    if let Err(e) = Url::parse(source) {
        tracing::debug!(source, error = %e, "matched RDM host but URL is not parseable");
        return None;
    }

    // 用字面路径，不做 `.`/`..` 规范化
    let path = literal_path(source);
    let path = path.strip_prefix('/').unwrap_or(path);

    let (project_id, sub_path) = split_project_path(path);
    let project_id = decode_segment(project_id);
    if project_id.is_empty() {
        tracing::debug!(source, "matched RDM host but no project id in path");
        return None;
    }
    let sub_path = sub_path
        .split('/')
        .map(decode_segment)
        .collect::<Vec<_>>()
        .join("/");

    let session_id = match git_ref {
        Some(r) if r != HEAD_REF => r.to_string(),
        _ => Uuid::new_v4().to_string(),
    };

    tracing::debug!(
        source,
        project_id = %project_id,
        sub_path = %sub_path,
        session_id = %session_id,
        "detected RDM source"
    );

    Some(FetchSpec {
        project_id,
        sub_path,
        host: host.clone(),
        session_id,
    })
}

/// 拆分出项目 id 与子路径，子路径开头的 `files/` 只去掉一次
fn split_project_path(path: &str) -> (&str, &str) {
    match path.split_once('/') {
        Some((project_id, rest)) => {
            let rest = rest.strip_prefix(LEGACY_FILES_SEGMENT).unwrap_or(rest);
            (project_id, rest)
        }
        None => (path, ""),
    }
}

/// `scheme://authority` 之后、`?`/`#` 之前的原样路径
fn literal_path(source: &str) -> &str {
    let rest = source.split_once("://").map_or(source, |(_, rest)| rest);
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let rest = &rest[authority_end..];
    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..path_end]
}

/// 单段解码；解出的 `/` 重新编码，保证段数不变
fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8_lossy()
        .replace('/', "%2F")
}
