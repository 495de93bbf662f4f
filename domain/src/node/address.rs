//! Node address value objects

use serde::{Deserialize, Serialize};

/// Addresses and identity of one cluster node.
///
/// Every field mirrors an attribute of a `nodelist/node` section and is
/// `None` when the attribute is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAddress {
    pub ring0: Option<String>,
    pub ring1: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
}

impl NodeAddress {
    pub fn new(
        ring0: Option<String>,
        ring1: Option<String>,
        name: Option<String>,
        id: Option<String>,
    ) -> Self {
        Self {
            ring0,
            ring1,
            name,
            id,
        }
    }

    /// Human-readable label: the node name, falling back to the ring0 address.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.ring0.as_deref())
            .unwrap_or("<unnamed>")
    }
}

/// Ordered list of node addresses in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeAddressList(Vec<NodeAddress>);

impl NodeAddressList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeAddress) {
        self.0.push(node);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeAddress> {
        self.0.iter()
    }

    /// Node ids of all nodes that declare one.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|node| node.id.as_deref())
    }
}

impl From<Vec<NodeAddress>> for NodeAddressList {
    fn from(nodes: Vec<NodeAddress>) -> Self {
        Self(nodes)
    }
}

impl<'a> IntoIterator for &'a NodeAddressList {
    type Item = &'a NodeAddress;
    type IntoIter = std::slice::Iter<'a, NodeAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
