pub mod rdm_provider;

pub use rdm_provider::RdmProvider;
