//! Cluster node addresses projected from `nodelist` sections

mod address;

pub use address::{NodeAddress, NodeAddressList};
