pub mod fetch_error;
pub mod fetch_lines;
pub mod fetch_message;

pub use fetch_error::FetchError;
pub use fetch_lines::FetchLines;
pub use fetch_message::FetchMessage;
