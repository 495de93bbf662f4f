//! Corosync configuration file adapter

mod file_store;

pub use file_store::CorosyncConfFile;
