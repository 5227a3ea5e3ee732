//! 把协作式异步遍历交给独立线程，调用方通过 [`FetchLines`] 同步读取。

use std::path::{Path, PathBuf};
use std::thread;

use crate::internal::fetch::functions::fetch_tree::fetch_tree;
use crate::internal::fetch::structs::{FetchError, FetchLines, FetchMessage};
use crate::internal::host::structs::HostConfig;
use crate::internal::locator::structs::FetchSpec;
use crate::internal::remote::traits::RemoteStorageClient;
use crate::internal::states::handoff_queue::HandoffQueue;

/// 在专用线程的单线程运行时里执行一次获取
///
/// `connect` 在开始行发出之后、项目解析之前调用，用于建立远程连接。
/// 返回的 [`FetchLines`] 不能在异步运行时内部迭代。
pub fn spawn_fetch<C, F>(connect: F, spec: FetchSpec, output_dir: impl Into<PathBuf>) -> FetchLines
where
    C: RemoteStorageClient + 'static,
    F: FnOnce(&HostConfig) -> Result<C, FetchError> + Send + 'static,
{
    let output_dir = output_dir.into();
    let (queue, consumer) = HandoffQueue::new();
    let producer = queue.clone();

    let spawned = thread::Builder::new()
        .name(format!("rdm-fetch-{}", spec.project_id))
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    let _ = producer.send(FetchMessage::Failed(FetchError::Runtime(e)));
                    let _ = producer.send(FetchMessage::Done);
                    return;
                }
            };
            runtime.block_on(drive_fetch(connect, &spec, &output_dir, &producer));
        });

    match spawned {
        Ok(handle) => FetchLines::new(consumer, Some(handle)),
        Err(e) => {
            let _ = queue.send(FetchMessage::Failed(FetchError::Runtime(e)));
            let _ = queue.send(FetchMessage::Done);
            FetchLines::new(consumer, None)
        }
    }
}

/// 异步执行一次完整获取：开始行 -> 连接 -> 遍历；错误作为最后一条消息，总是以 `Done` 结尾
pub async fn drive_fetch<C, F>(
    connect: F,
    spec: &FetchSpec,
    output_dir: &Path,
    queue: &HandoffQueue<FetchMessage>,
) where
    C: RemoteStorageClient,
    F: FnOnce(&HostConfig) -> Result<C, FetchError>,
{
    let _ = queue.send(FetchMessage::Line(spec.start_line()));
    tracing::info!(
        project = %spec.project_id,
        path = %spec.sub_path,
        api = spec.host.api_url(),
        output = %output_dir.display(),
        "fetching RDM directory"
    );

    let result = match connect(&spec.host) {
        Ok(client) => fetch_tree(&client, spec, output_dir, queue).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(project = %spec.project_id, error = %e, "RDM fetch failed");
        let _ = queue.send(FetchMessage::Failed(e));
    }
    let _ = queue.send(FetchMessage::Done);
}
