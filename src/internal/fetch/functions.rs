pub mod fetch_tree;
pub mod spawn_fetch;

pub use fetch_tree::fetch_tree;
pub use spawn_fetch::spawn_fetch;
