use crate::internal::fetch::structs::FetchError;
use crate::internal::remote::osf::raw_json::{EntryData, NodeData, StorageData};
use crate::internal::remote::structs::{
    RemoteFile, RemoteFolder, RemoteNode, RemoteProject, RemoteStorage,
};

/// JSON:API 原始结构转换为领域结构体
pub trait ToRemoteModel {
    type Output;

    fn to_remote_model(self) -> Result<Self::Output, FetchError>;
}

impl ToRemoteModel for NodeData {
    type Output = RemoteProject;

    fn to_remote_model(self) -> Result<RemoteProject, FetchError> {
        Ok(RemoteProject {
            id: self.id,
            title: self.attributes.title,
        })
    }
}

impl ToRemoteModel for StorageData {
    type Output = RemoteStorage;

    fn to_remote_model(self) -> Result<RemoteStorage, FetchError> {
        let StorageData {
            attributes,
            relationships,
        } = self;

        let children_url = relationships
            .as_ref()
            .and_then(|r| r.files_href())
            .ok_or_else(|| {
                FetchError::MissingLink(format!("files of storage {}", attributes.name))
            })?
            .to_string();

        Ok(RemoteStorage {
            root: RemoteFolder {
                name: attributes.name.clone(),
                path: attributes.path.unwrap_or_else(|| "/".to_string()),
                children_url,
            },
            name: attributes.name,
            provider: attributes.provider,
        })
    }
}

/// 未知 kind 返回 `None`，由调用方跳过
impl ToRemoteModel for EntryData {
    type Output = Option<RemoteNode>;

    fn to_remote_model(self) -> Result<Option<RemoteNode>, FetchError> {
        let EntryData {
            attributes,
            links,
            relationships,
        } = self;

        // 优先用可读路径，其次内部路径，最后用名称
        let path = attributes
            .materialized_path
            .or(attributes.path)
            .unwrap_or_else(|| format!("/{}", attributes.name));

        match attributes.kind.as_str() {
            "file" => {
                let download_url = links.download.ok_or_else(|| {
                    FetchError::MissingLink(format!("download of file {path}"))
                })?;
                Ok(Some(RemoteNode::File(RemoteFile {
                    name: attributes.name,
                    path,
                    download_url,
                    size: attributes.size,
                })))
            }
            "folder" => {
                let children_url = relationships
                    .as_ref()
                    .and_then(|r| r.files_href())
                    .ok_or_else(|| {
                        FetchError::MissingLink(format!("files of folder {path}"))
                    })?
                    .to_string();
                Ok(Some(RemoteNode::Folder(RemoteFolder {
                    name: attributes.name,
                    path,
                    children_url,
                })))
            }
            other => {
                tracing::warn!(kind = other, path = %path, "skipping remote entry of unknown kind");
                Ok(None)
            }
        }
    }
}
