//! 远程存储客户端 trait：遍历与写盘逻辑只依赖这里的接口。

use async_trait::async_trait;
use tokio::io::AsyncWrite;

use crate::internal::fetch::structs::FetchError;
use crate::internal::remote::structs::{
    RemoteFile, RemoteFolder, RemoteNode, RemoteProject, RemoteStorage,
};

/// 远程存储访问能力
///
/// 所有方法都是单次请求级别的，不做重试；错误直接向上传播。
#[async_trait]
pub trait RemoteStorageClient: Send + Sync {
    /// 按 id 获取项目，不存在时返回 [`FetchError::NotFound`]
    async fn project(&self, project_id: &str) -> Result<RemoteProject, FetchError>;

    /// 项目下所有存储，保持远程返回顺序
    async fn storages(
        &self,
        project: &RemoteProject,
    ) -> Result<Vec<RemoteStorage>, FetchError>;

    /// 按名称取存储：先匹配 provider，再匹配显示名
    async fn storage(
        &self,
        project: &RemoteProject,
        name: &str,
    ) -> Result<RemoteStorage, FetchError> {
        let mut storages = self.storages(project).await?;
        let position = storages
            .iter()
            .position(|s| s.provider == name)
            .or_else(|| storages.iter().position(|s| s.name == name));

        match position {
            Some(i) => Ok(storages.swap_remove(i)),
            None => Err(FetchError::NotFound(format!(
                "storage {name} in project {}",
                project.id
            ))),
        }
    }

    /// 列出文件夹的直接子项（不递归），保持远程返回顺序
    async fn children(
        &self,
        folder: &RemoteFolder,
    ) -> Result<Vec<RemoteNode>, FetchError>;

    /// 把文件内容写入 `dest`，返回写入字节数；不负责 flush
    async fn write_to(
        &self,
        file: &RemoteFile,
        dest: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64, FetchError>;
}
