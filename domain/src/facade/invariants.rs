//! Derived quorum options
//!
//! `two_node` and the `lms`/`2nodelms` qdevice algorithm depend jointly on
//! the node count, `auto_tie_breaker` and the presence of a quorum device.
//! They are recomputed from scratch after every mutation rather than
//! patched by each mutation path.

use super::ConfigFacade;
use super::mutation::set_section_options;
use std::collections::BTreeMap;
use tracing::debug;

impl ConfigFacade {
    pub(super) fn update_derived_options(&mut self) {
        let has_device = self.has_quorum_device();
        let two_nodes = self.get_nodes().len() == 2;
        let auto_tie_breaker = self
            .config
            .get_sections(Some("quorum"))
            .filter_map(|quorum| quorum.last_attribute("auto_tie_breaker"))
            .last()
            .is_some_and(|value| value != "0");

        if two_nodes && !auto_tie_breaker && !has_device {
            let two_node = BTreeMap::from([("two_node".to_string(), "1".to_string())]);
            set_section_options(&mut self.ensure_quorum_sections(), &two_node);
        } else {
            for quorum in self.config.get_sections_mut(Some("quorum")) {
                quorum.del_attributes_by_name("two_node");
            }
        }

        let nets = self
            .config
            .get_sections_mut(Some("quorum"))
            .flat_map(|quorum| quorum.get_sections_mut(Some("device")))
            .flat_map(|device| device.get_sections_mut(Some("net")));
        for net in nets {
            let replacement = match (net.last_attribute("algorithm"), two_nodes) {
                (Some("lms"), true) => "2nodelms",
                (Some("2nodelms"), false) => "lms",
                _ => continue,
            };
            debug!(algorithm = replacement, two_nodes, "Switching qdevice algorithm");
            net.set_attribute("algorithm", replacement);
        }
    }
}
