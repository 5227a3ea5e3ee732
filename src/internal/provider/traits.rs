pub mod content_provider;

pub use content_provider::ContentProvider;
