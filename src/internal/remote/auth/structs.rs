pub mod rdm_auth;

pub use rdm_auth::RdmAuth;
