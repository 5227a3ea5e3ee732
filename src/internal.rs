pub mod constants;
pub mod fetch;
pub mod host;
pub mod locator;
pub mod logging;
pub mod provider;
pub mod remote;
pub mod states;
