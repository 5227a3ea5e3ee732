pub mod remote_storage_client;

pub use remote_storage_client::RemoteStorageClient;
