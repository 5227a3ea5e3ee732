//! 远程树遍历：解析子路径，深度优先复制文件到本地。

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::internal::fetch::structs::FetchError;
use crate::internal::fetch::traits::LineSink;
use crate::internal::locator::structs::FetchSpec;
use crate::internal::remote::structs::{NodeKind, RemoteFile, RemoteFolder, RemoteNode};
use crate::internal::remote::traits::RemoteStorageClient;

type WalkFuture<'a> = Pin<Box<dyn Future<Output = Result<(), FetchError>> + Send + 'a>>;

/// 按 `spec` 把远程内容写入 `output_dir`
///
/// - 子路径为空：遍历项目的所有存储，每个存储写到 `output_dir/<存储名>/`
/// - 子路径非空：首段是存储名，其余逐段匹配；目标内容直接写到 `output_dir/`
///
/// 每复制一个文件向 `sink` 发一行 `"Fetch: ..."`。不输出开始行，开始行由调用方负责。
/// 遇到第一个错误立即返回，已写入的文件保留。
pub async fn fetch_tree<C>(
    client: &C,
    spec: &FetchSpec,
    output_dir: &Path,
    sink: &dyn LineSink,
) -> Result<(), FetchError>
where
    C: RemoteStorageClient + ?Sized,
{
    let project = client.project(&spec.project_id).await?;
    let sub_path = spec.sub_path.trim_end_matches('/');

    if sub_path.is_empty() {
        for storage in client.storages(&project).await? {
            validate_name(NodeKind::Storage, &storage.name)?;
            let local_dir = PathBuf::from(&storage.name);
            walk_folder(client, &storage.root, output_dir, Some(local_dir), sink).await?;
        }
        return Ok(());
    }

    let (storage_name, rest) = match sub_path.split_once('/') {
        Some((storage_name, rest)) => (storage_name, rest),
        None => (sub_path, ""),
    };

    let storage = client.storage(&project, storage_name).await?;

    match resolve_path(client, &storage.root, rest).await? {
        RemoteNode::Folder(folder) => walk_folder(client, &folder, output_dir, None, sink).await,
        RemoteNode::File(file) => copy_file(client, &file, output_dir, None, sink).await,
    }
}

/// 从 `root` 开始按名称逐段下降，任何一段不存在都返回 NotFound
async fn resolve_path<C>(
    client: &C,
    root: &RemoteFolder,
    rest: &str,
) -> Result<RemoteNode, FetchError>
where
    C: RemoteStorageClient + ?Sized,
{
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    let mut current = root.clone();

    for (index, segment) in segments.iter().enumerate() {
        let is_last = index + 1 == segments.len();
        let found = client
            .children(&current)
            .await?
            .into_iter()
            .find(|node| node.name() == *segment);

        match found {
            Some(RemoteNode::Folder(folder)) => current = folder,
            Some(RemoteNode::File(file)) if is_last => return Ok(RemoteNode::File(file)),
            _ => {
                return Err(FetchError::NotFound(format!(
                    "path {rest} (missing {segment} under {})",
                    current.path
                )));
            }
        }
    }

    Ok(RemoteNode::Folder(current))
}

/// 当前层先写文件，再依次进入子文件夹
fn walk_folder<'a, C>(
    client: &'a C,
    folder: &'a RemoteFolder,
    output_dir: &'a Path,
    local_dir: Option<PathBuf>,
    sink: &'a dyn LineSink,
) -> WalkFuture<'a>
where
    C: RemoteStorageClient + ?Sized,
{
    Box::pin(async move {
        let mut files = Vec::new();
        let mut folders = Vec::new();
        for node in client.children(folder).await? {
            match node {
                RemoteNode::File(file) => files.push(file),
                RemoteNode::Folder(sub) => folders.push(sub),
            }
        }

        for file in &files {
            copy_file(client, file, output_dir, local_dir.as_deref(), sink).await?;
        }

        for sub in &folders {
            validate_name(NodeKind::Folder, &sub.name)?;
            let next_dir = match &local_dir {
                Some(dir) => dir.join(&sub.name),
                None => PathBuf::from(&sub.name),
            };
            walk_folder(client, sub, output_dir, Some(next_dir), sink).await?;
        }

        Ok(())
    })
}

async fn copy_file<C>(
    client: &C,
    file: &RemoteFile,
    output_dir: &Path,
    local_dir: Option<&Path>,
    sink: &dyn LineSink,
) -> Result<(), FetchError>
where
    C: RemoteStorageClient + ?Sized,
{
    validate_name(NodeKind::File, &file.name)?;

    let (local_path, local_dir_path) = match local_dir {
        Some(dir) => (dir.join(&file.name), output_dir.join(dir)),
        None => (PathBuf::from(&file.name), output_dir.to_path_buf()),
    };

    fs::create_dir_all(&local_dir_path)
        .await
        .map_err(|source| FetchError::CreateDir {
            path: local_dir_path.clone(),
            source,
        })?;

    let local_file_path = output_dir.join(&local_path);
    let mut dest = File::create(&local_file_path)
        .await
        .map_err(|source| FetchError::CreateFile {
            path: local_file_path.clone(),
            source,
        })?;

    let written = client.write_to(file, &mut dest).await?;
    dest.flush().await.map_err(FetchError::Sink)?;

    tracing::info!(
        remote = %file.path,
        local = %local_file_path.display(),
        bytes = written,
        "fetched file"
    );

    sink.emit(format!(
        "Fetch: {} ({} to {})\n",
        file.path,
        local_path.display(),
        output_dir.display()
    ));

    Ok(())
}

fn validate_name(kind: NodeKind, name: &str) -> Result<(), FetchError> {
    if NodeKind::is_valid_name(name) {
        Ok(())
    } else {
        Err(FetchError::InvalidName {
            kind,
            name: name.to_string(),
        })
    }
}
