pub mod remote_node;

pub use remote_node::{
    NodeKind, RemoteFile, RemoteFolder, RemoteNode, RemoteProject, RemoteStorage,
};
