use core::fmt;

/// 远程项目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProject {
    pub id: String,
    pub title: Option<String>,
}

/// 项目下的顶层存储，本身也是一棵文件夹树的根
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStorage {
    /// 显示名，也是未指定子路径时的本地目录名
    pub name: String,
    /// 存储后端标识，如 `osfstorage`
    pub provider: String,
    pub root: RemoteFolder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFolder {
    pub name: String,
    /// 存储内的远程路径
    pub path: String,
    /// 列出子项的地址
    pub children_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub name: String,
    /// 存储内的远程路径，如 `/dir/b.txt`
    pub path: String,
    pub download_url: String,
    pub size: Option<u64>,
}

/// 文件夹的子项，树结构，无环
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteNode {
    File(RemoteFile),
    Folder(RemoteFolder),
}

impl RemoteNode {
    pub fn name(&self) -> &str {
        match self {
            RemoteNode::File(file) => &file.name,
            RemoteNode::Folder(folder) => &folder.name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Storage,
    Folder,
    File,
}

impl NodeKind {
    /// 远程名称会直接拼进本地路径，不允许路径分隔符和 `.`/`..`
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains('/')
            && !name.contains('\\')
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Storage => "Storage",
            NodeKind::Folder => "Folder",
            NodeKind::File => "File",
        };
        f.write_str(label)
    }
}
