//! Read-only projections of the configuration tree
//!
//! Nothing here is cached: the tree may change between calls, so every
//! query walks the current sections.

use super::ConfigFacade;
use crate::node::{NodeAddress, NodeAddressList};
use crate::section::Section;
use crate::validation::QUORUM_OPTIONS;
use serde::Serialize;
use std::collections::BTreeMap;

/// Quorum device configuration as found in `quorum/device` sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuorumDeviceSettings {
    /// Value of the last `model` attribute, if any.
    pub model: Option<String>,
    /// Attributes of the nested section named after the model.
    pub model_options: BTreeMap<String, String>,
    /// Every other attribute of the device sections.
    pub generic_options: BTreeMap<String, String>,
}

impl ConfigFacade {
    /// All nodes of all `nodelist` sections, in document order.
    pub fn get_nodes(&self) -> NodeAddressList {
        let mut nodes = NodeAddressList::new();
        for nodelist in self.config.get_sections(Some("nodelist")) {
            for node in nodelist.get_sections(Some("node")) {
                let mut address = NodeAddress::default();
                for (name, value) in node.get_attributes(None) {
                    let field = match name {
                        "ring0_addr" => &mut address.ring0,
                        "ring1_addr" => &mut address.ring1,
                        "name" => &mut address.name,
                        "nodeid" => &mut address.id,
                        _ => continue,
                    };
                    *field = Some(value.to_string());
                }
                nodes.push(address);
            }
        }
        nodes
    }

    /// Configurable quorum options; later sections override earlier ones.
    pub fn get_quorum_options(&self) -> BTreeMap<String, String> {
        let mut options = BTreeMap::new();
        for quorum in self.config.get_sections(Some("quorum")) {
            for (name, value) in quorum.get_attributes(None) {
                if QUORUM_OPTIONS.contains(&name) {
                    options.insert(name.to_string(), value.to_string());
                }
            }
        }
        options
    }

    /// True if any `quorum/device` section declares a model.
    pub fn has_quorum_device(&self) -> bool {
        self.device_sections()
            .any(|device| device.get_attributes(Some("model")).next().is_some())
    }

    pub fn get_quorum_device_settings(&self) -> QuorumDeviceSettings {
        let mut model = None;
        let mut generic_options = BTreeMap::new();
        let mut options_by_section: BTreeMap<&str, BTreeMap<String, String>> = BTreeMap::new();

        for device in self.device_sections() {
            for (name, value) in device.get_attributes(None) {
                if name == "model" {
                    model = Some(value.to_string());
                } else {
                    generic_options.insert(name.to_string(), value.to_string());
                }
            }
            for subsection in device.get_sections(None) {
                options_by_section.entry(subsection.name()).or_default().extend(
                    subsection
                        .get_attributes(None)
                        .map(|(name, value)| (name.to_string(), value.to_string())),
                );
            }
        }

        let model_options = model
            .as_deref()
            .and_then(|model| options_by_section.remove(model))
            .unwrap_or_default();

        QuorumDeviceSettings {
            model,
            model_options,
            generic_options,
        }
    }

    /// The configured device model (last `model` attribute wins).
    pub(crate) fn device_model(&self) -> Option<String> {
        self.device_sections()
            .filter_map(|device| device.last_attribute("model"))
            .last()
            .map(ToString::to_string)
    }

    pub(crate) fn device_sections(&self) -> impl Iterator<Item = &Section> {
        self.config
            .get_sections(Some("quorum"))
            .flat_map(|quorum| quorum.get_sections(Some("device")))
    }
}
