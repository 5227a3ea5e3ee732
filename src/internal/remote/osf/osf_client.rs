use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::internal::fetch::structs::FetchError;
use crate::internal::host::structs::HostConfig;
use crate::internal::remote::auth::structs::RdmAuth;
use crate::internal::remote::osf::impl_raw_json::ToRemoteModel;
use crate::internal::remote::osf::raw_json::{Document, EntryData, NodeData, StorageData};
use crate::internal::remote::structs::{
    RemoteFile, RemoteFolder, RemoteNode, RemoteProject, RemoteStorage,
};
use crate::internal::remote::traits::RemoteStorageClient;

/// OSF API v2 客户端
///
/// - 项目：`GET nodes/{id}/`
/// - 存储列表：`GET nodes/{id}/files/`
/// - 文件夹子项：`relationships.files.links.related.href`
/// - 列表接口按 `links.next` 翻页直到为 null
#[derive(Debug, Clone)]
pub struct OsfClient {
    auth: RdmAuth,
}

impl OsfClient {
    pub fn new(api_base_url: &str, token: Option<&str>) -> Result<Self, FetchError> {
        Ok(Self {
            auth: RdmAuth::new(api_base_url, token)?,
        })
    }

    /// 按主机配置建立连接，token 按 主机 > `OSF_TOKEN` > 匿名 解析
    pub fn connect(host: &HostConfig) -> Result<Self, FetchError> {
        let token = host.resolve_token();
        let client = Self::new(host.api_url(), token.as_deref())?;
        tracing::debug!(
            api = %client.auth.base_url,
            token = client.auth.fingerprint_prefix(),
            "connected to RDM API"
        );
        Ok(client)
    }

    pub fn auth(&self) -> &RdmAuth {
        &self.auth
    }

    async fn send_get(&self, url: &str) -> Result<Response, FetchError> {
        tracing::debug!(url, "GET");
        let res = self.auth.client.get(url).send().await?;
        ensure_success(res, url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let res = self.send_get(url).await?;
        let text = res.text().await?;
        serde_json::from_str(&text).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// 读取全部分页
    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Vec<T>, FetchError> {
        let mut items = Vec::new();
        let mut next = Some(url.to_string());

        while let Some(page_url) = next {
            let page: Document<Vec<T>> = self.get_json(&page_url).await?;
            items.extend(page.data);
            next = page.links.and_then(|l| l.next).filter(|n| *n != page_url);
        }

        Ok(items)
    }
}

#[async_trait]
impl RemoteStorageClient for OsfClient {
    async fn project(&self, project_id: &str) -> Result<RemoteProject, FetchError> {
        let url = self.auth.endpoint(&format!("nodes/{project_id}/"))?;
        let doc: Document<NodeData> = self.get_json(&url).await.map_err(|e| match e {
            FetchError::NotFound(_) => FetchError::NotFound(format!("project {project_id}")),
            other => other,
        })?;
        doc.data.to_remote_model()
    }

    async fn storages(
        &self,
        project: &RemoteProject,
    ) -> Result<Vec<RemoteStorage>, FetchError> {
        let url = self.auth.endpoint(&format!("nodes/{}/files/", project.id))?;
        let raw: Vec<StorageData> = self.get_all_pages(&url).await?;
        raw.into_iter().map(ToRemoteModel::to_remote_model).collect()
    }

    async fn children(
        &self,
        folder: &RemoteFolder,
    ) -> Result<Vec<RemoteNode>, FetchError> {
        let raw: Vec<EntryData> = self.get_all_pages(&folder.children_url).await?;

        let mut nodes = Vec::with_capacity(raw.len());
        for entry in raw {
            if let Some(node) = entry.to_remote_model()? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    async fn write_to(
        &self,
        file: &RemoteFile,
        dest: &mut (dyn AsyncWrite + Unpin + Send),
    ) -> Result<u64, FetchError> {
        let res = self.send_get(&file.download_url).await?;
        let mut stream = res.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            dest.write_all(&chunk).await.map_err(FetchError::Sink)?;
            written += chunk.len() as u64;
        }

        Ok(written)
    }
}

/// 非 2xx 时转换为错误，404 单独归为 NotFound
async fn ensure_success(res: Response, url: &str) -> Result<Response, FetchError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound(url.to_string()));
    }

    let body = res.text().await.unwrap_or_default();
    Err(FetchError::Status {
        status: status.as_u16(),
        url: url.to_string(),
        body,
    })
}
