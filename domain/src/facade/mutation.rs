//! Quorum and quorum device mutations
//!
//! Every mutation validates first and touches the tree only when nothing
//! blocks, then recomputes derived options and prunes empty sections.
//!
//! The document may contain several `quorum` sections (or several `device`
//! sections). Only the last one is authoritative, so options are written
//! with [`set_section_options`]: the touched keys are purged from every
//! section but the last, then set (or, for empty values, deleted) there.

use super::ConfigFacade;
use crate::core::error::{FacadeError, ValidationFailure};
use crate::section::Section;
use crate::validation::{
    self, Finding, FindingCode, validate_generic_options, validate_model, validate_model_options,
    validate_quorum_options, validate_writable_name, validate_writable_options,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Quorum options that cannot be combined with a quorum device.
const QDEVICE_CONFLICTING_OPTIONS: [&str; 5] = [
    "allow_downscale",
    "auto_tie_breaker",
    "last_man_standing",
    "last_man_standing_window",
    "two_node",
];

impl ConfigFacade {
    /// Set options of the `quorum` section; an empty value removes the option.
    ///
    /// Returns the warnings of forced findings on success.
    pub fn set_quorum_options(
        &mut self,
        options: &BTreeMap<String, String>,
        force: bool,
    ) -> Result<Vec<Finding>, FacadeError> {
        let mut findings = validate_quorum_options(options, force);
        findings.extend(validate_writable_options(options));
        let warnings = validation::gate(findings)?;

        set_section_options(&mut self.ensure_quorum_sections(), options);
        debug!(keys = ?options.keys().collect::<Vec<_>>(), "Quorum options set");

        self.finish_mutation();
        Ok(warnings)
    }

    /// Add a quorum device.
    ///
    /// Fails if a device is already defined. Options conflicting with a
    /// quorum device are removed from the quorum section and any leftover
    /// `device` sections are dropped before the new one is created.
    pub fn add_quorum_device(
        &mut self,
        model: &str,
        model_options: &BTreeMap<String, String>,
        generic_options: &BTreeMap<String, String>,
        force_model: bool,
        force_options: bool,
    ) -> Result<Vec<Finding>, FacadeError> {
        if self.has_quorum_device() {
            return Err(ValidationFailure::single(Finding::fatal(FindingCode::DeviceAlreadyDefined)).into());
        }

        let nodes = self.get_nodes();
        let mut findings = validate_model(model, force_model);
        findings.extend(validate_writable_name(model));
        findings.extend(validate_model_options(
            model,
            model_options,
            true,
            &nodes,
            force_options,
        ));
        findings.extend(validate_writable_options(model_options));
        findings.extend(validate_generic_options(generic_options, force_options));
        findings.extend(validate_writable_options(generic_options));
        let warnings = validation::gate(findings)?;

        let conflicting: BTreeMap<String, String> = QDEVICE_CONFLICTING_OPTIONS
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        let mut quorum_sections = self.ensure_quorum_sections();
        set_section_options(&mut quorum_sections, &conflicting);
        for quorum in quorum_sections.iter_mut() {
            quorum.del_sections_by_name("device");
        }

        let mut device = Section::new("device");
        set_section_options(&mut [&mut device], generic_options);
        device.set_attribute("model", model);
        let mut model_section = Section::new(model);
        set_section_options(&mut [&mut model_section], model_options);
        device.add_section(model_section);
        if let Some(quorum) = quorum_sections.last_mut() {
            quorum.add_section(device);
        }
        debug!(model, "Quorum device added");

        self.finish_mutation();
        Ok(warnings)
    }

    /// Update options of the existing quorum device.
    ///
    /// Required model options are not re-checked for presence because the
    /// stored values persist; clearing one is still rejected.
    pub fn update_quorum_device(
        &mut self,
        model_options: &BTreeMap<String, String>,
        generic_options: &BTreeMap<String, String>,
        force_options: bool,
    ) -> Result<Vec<Finding>, FacadeError> {
        let Some(model) = self.device_model() else {
            return Err(ValidationFailure::single(Finding::fatal(FindingCode::DeviceNotDefined)).into());
        };

        let nodes = self.get_nodes();
        let mut findings =
            validate_model_options(&model, model_options, false, &nodes, force_options);
        findings.extend(validate_writable_options(model_options));
        findings.extend(validate_generic_options(generic_options, force_options));
        findings.extend(validate_writable_options(generic_options));
        let warnings = validation::gate(findings)?;

        let mut devices: Vec<&mut Section> = self.device_sections_mut().collect();
        set_section_options(&mut devices, generic_options);
        let has_model_section = devices
            .iter()
            .any(|device| device.get_sections(Some(model.as_str())).next().is_some());
        if !model_options.is_empty()
            && !has_model_section
            && let Some(device) = devices.last_mut()
        {
            device.add_section(Section::new(model.as_str()));
        }

        let mut model_sections: Vec<&mut Section> = self
            .device_sections_mut()
            .flat_map(|device| device.get_sections_mut(Some(model.as_str())))
            .collect();
        set_section_options(&mut model_sections, model_options);
        debug!(model = %model, "Quorum device updated");

        self.finish_mutation();
        Ok(warnings)
    }

    /// Remove every quorum device section.
    pub fn remove_quorum_device(&mut self) -> Result<(), FacadeError> {
        if !self.has_quorum_device() {
            return Err(ValidationFailure::single(Finding::fatal(FindingCode::DeviceNotDefined)).into());
        }

        for quorum in self.config.get_sections_mut(Some("quorum")) {
            quorum.del_sections_by_name("device");
        }
        debug!("Quorum device removed");

        self.finish_mutation();
        Ok(())
    }

    /// All `quorum` sections, creating one if the document has none.
    pub(super) fn ensure_quorum_sections(&mut self) -> Vec<&mut Section> {
        if self.config.get_sections(Some("quorum")).next().is_none() {
            self.config.add_section(Section::new("quorum"));
        }
        self.config.get_sections_mut(Some("quorum")).collect()
    }

    fn device_sections_mut(&mut self) -> impl Iterator<Item = &mut Section> {
        self.config
            .get_sections_mut(Some("quorum"))
            .flat_map(|quorum| quorum.get_sections_mut(Some("device")))
    }
}

/// Apply options to a group of same-named sections.
///
/// The keys are removed from every section but the last; the last section
/// receives the values, where an empty value deletes the key. An empty
/// group is left alone.
pub(super) fn set_section_options(sections: &mut [&mut Section], options: &BTreeMap<String, String>) {
    let Some((last, rest)) = sections.split_last_mut() else {
        return;
    };
    for section in rest.iter_mut() {
        for name in options.keys() {
            section.del_attributes_by_name(name);
        }
    }
    for (name, value) in options {
        if value.is_empty() {
            last.del_attributes_by_name(name);
        } else {
            last.set_attribute(name, value);
        }
    }
}
