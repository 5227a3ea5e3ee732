pub mod fetch_spec;

pub use fetch_spec::FetchSpec;
