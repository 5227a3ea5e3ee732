use serde::Deserialize;

/// JSON:API 响应顶层 `{"data": ..., "links": {...}}`
#[derive(Debug, Deserialize, Clone)]
pub struct Document<T> {
    pub data: T,
    /// 列表接口的分页链接，单个资源接口一般没有
    #[serde(default)]
    pub links: Option<PageLinks>,
}

/// 分页链接，`next` 为 null 表示最后一页
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
}

/// `GET nodes/{id}/` 的 data
#[derive(Debug, Deserialize, Clone)]
pub struct NodeData {
    pub id: String,
    #[serde(default)]
    pub attributes: NodeAttributes,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NodeAttributes {
    #[serde(default)]
    pub title: Option<String>,
}

/// `GET nodes/{id}/files/` 列表中的一项：一个存储后端
#[derive(Debug, Deserialize, Clone)]
pub struct StorageData {
    pub attributes: StorageAttributes,
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageAttributes {
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub path: Option<String>,
}

/// 文件夹列表中的一项，`kind` 为 `file` 或 `folder`
#[derive(Debug, Deserialize, Clone)]
pub struct EntryData {
    pub attributes: EntryAttributes,
    #[serde(default)]
    pub links: EntryLinks,
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EntryAttributes {
    pub kind: String,
    pub name: String,
    /// 存储内的可读路径，如 `/dir/b.txt`
    #[serde(default)]
    pub materialized_path: Option<String>,
    /// 存储内部 id 路径，可读路径缺失时兜底
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EntryLinks {
    #[serde(default)]
    pub download: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Relationships {
    #[serde(default)]
    pub files: Option<Relationship>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Relationship {
    pub links: RelationshipLinks,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RelationshipLinks {
    pub related: RelatedLink,
}

/// `related` 可能是 `{"href": ..., "meta": {...}}`，也可能直接是字符串
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum RelatedLink {
    Object { href: String },
    Plain(String),
}

impl RelatedLink {
    pub fn href(&self) -> &str {
        match self {
            RelatedLink::Object { href } => href,
            RelatedLink::Plain(href) => href,
        }
    }
}

impl Relationships {
    /// `relationships.files.links.related.href`
    pub fn files_href(&self) -> Option<&str> {
        self.files.as_ref().map(|r| r.links.related.href())
    }
}
