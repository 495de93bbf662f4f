//! Section tree model
//!
//! A corosync configuration document is an ordered tree of named sections.
//! Each section holds an ordered list of `key: value` attributes (keys may
//! repeat) and an ordered list of child sections (names may repeat among
//! siblings, e.g. several `quorum` blocks).
//!
//! The tree is purely mechanical: it knows nothing about clusters or quorum.
//! Cluster semantics live in [`crate::facade`].
//!
//! ```
//! use corosync_domain::section::Section;
//!
//! let mut quorum = Section::new("quorum");
//! quorum.set_attribute("provider", "corosync_votequorum");
//! quorum.set_attribute("wait_for_all", "1");
//!
//! let mut root = Section::root();
//! root.add_section(quorum);
//!
//! assert_eq!(root.get_sections(Some("quorum")).count(), 1);
//! ```

pub mod parser;
pub mod writer;

pub use parser::{ParseError, parse};
pub use writer::export;

use std::fmt;

/// A named node of the configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    attributes: Vec<(String, String)>,
    sections: Vec<Section>,
}

impl Section {
    /// Create an empty section with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Create the unnamed root section of a document.
    pub fn root() -> Self {
        Self::new("")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ==================== Attributes ====================

    /// Attributes in document order, optionally filtered by key.
    pub fn get_attributes<'a>(
        &'a self,
        key: Option<&str>,
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.attributes
            .iter()
            .filter(move |(name, _)| key.is_none_or(|key| key == name))
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Value of the last attribute with the given key.
    pub fn last_attribute(&self, key: &str) -> Option<&str> {
        self.get_attributes(Some(key)).last().map(|(_, value)| value)
    }

    /// Append an attribute, keeping any existing ones with the same key.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), value.into()));
    }

    /// Set an attribute value.
    ///
    /// If the key is absent the attribute is appended. If it is present the
    /// first occurrence takes the new value in place and any further
    /// occurrences are removed, so the section ends up with exactly one
    /// attribute for `key`.
    pub fn set_attribute(&mut self, key: &str, value: &str) {
        let mut found = false;
        self.attributes.retain_mut(|(name, current)| {
            if name.as_str() != key {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            *current = value.to_string();
            true
        });
        if !found {
            self.add_attribute(key, value);
        }
    }

    /// Remove every attribute with the given key.
    pub fn del_attributes_by_name(&mut self, key: &str) {
        self.attributes.retain(|(name, _)| name != key);
    }

    // ==================== Sections ====================

    /// Direct children in document order, optionally filtered by name.
    pub fn get_sections<'a>(&'a self, name: Option<&str>) -> impl Iterator<Item = &'a Section> {
        self.sections
            .iter()
            .filter(move |section| name.is_none_or(|name| section.name == name))
    }

    /// Mutable direct children in document order, optionally filtered by name.
    pub fn get_sections_mut<'a>(
        &'a mut self,
        name: Option<&str>,
    ) -> impl Iterator<Item = &'a mut Section> {
        self.sections
            .iter_mut()
            .filter(move |section| name.is_none_or(|name| section.name == name))
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Remove the direct child at `index`, returning it.
    pub fn del_section(&mut self, index: usize) -> Option<Section> {
        (index < self.sections.len()).then(|| self.sections.remove(index))
    }

    /// Remove every direct child with the given name.
    pub fn del_sections_by_name(&mut self, name: &str) {
        self.sections.retain(|section| section.name != name);
    }

    /// Keep only the direct children for which `keep` returns true.
    ///
    /// The predicate may mutate the child before deciding.
    pub fn retain_sections_mut(&mut self, keep: impl FnMut(&mut Section) -> bool) {
        self.sections.retain_mut(keep);
    }

    /// True iff the section has neither attributes nor children.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.sections.is_empty()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&export(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(section: &Section) -> Vec<(&str, &str)> {
        section.get_attributes(None).collect()
    }

    #[test]
    fn test_set_attribute_appends_when_absent() {
        let mut section = Section::new("totem");
        section.set_attribute("version", "2");
        section.set_attribute("cluster_name", "alpha");
        assert_eq!(attrs(&section), vec![("version", "2"), ("cluster_name", "alpha")]);
    }

    #[test]
    fn test_set_attribute_replaces_single_occurrence_in_place() {
        let mut section = Section::new("totem");
        section.add_attribute("version", "2");
        section.add_attribute("cluster_name", "alpha");
        section.set_attribute("version", "3");
        assert_eq!(attrs(&section), vec![("version", "3"), ("cluster_name", "alpha")]);
    }

    #[test]
    fn test_set_attribute_collapses_duplicates() {
        let mut section = Section::new("quorum");
        section.add_attribute("wait_for_all", "0");
        section.add_attribute("provider", "corosync_votequorum");
        section.add_attribute("wait_for_all", "0");
        section.set_attribute("wait_for_all", "1");
        assert_eq!(
            attrs(&section),
            vec![("wait_for_all", "1"), ("provider", "corosync_votequorum")]
        );
    }

    #[test]
    fn test_get_attributes_filter_and_last() {
        let mut section = Section::new("quorum");
        section.add_attribute("a", "1");
        section.add_attribute("b", "2");
        section.add_attribute("a", "3");
        let values: Vec<_> = section.get_attributes(Some("a")).map(|(_, v)| v).collect();
        assert_eq!(values, vec!["1", "3"]);
        assert_eq!(section.last_attribute("a"), Some("3"));
        assert_eq!(section.last_attribute("missing"), None);
    }

    #[test]
    fn test_del_attributes_by_name_removes_all() {
        let mut section = Section::new("quorum");
        section.add_attribute("two_node", "1");
        section.add_attribute("provider", "corosync_votequorum");
        section.add_attribute("two_node", "1");
        section.del_attributes_by_name("two_node");
        assert_eq!(attrs(&section), vec![("provider", "corosync_votequorum")]);
    }

    #[test]
    fn test_sections_filter_and_delete() {
        let mut root = Section::root();
        root.add_section(Section::new("quorum"));
        root.add_section(Section::new("totem"));
        root.add_section(Section::new("quorum"));

        assert_eq!(root.get_sections(None).count(), 3);
        assert_eq!(root.get_sections(Some("quorum")).count(), 2);

        let removed = root.del_section(1).unwrap();
        assert_eq!(removed.name(), "totem");
        assert!(root.del_section(5).is_none());

        root.del_sections_by_name("quorum");
        assert!(root.is_empty());
    }

    #[test]
    fn test_get_sections_mut_edits_in_place() {
        let mut root = Section::root();
        root.add_section(Section::new("quorum"));
        root.add_section(Section::new("quorum"));
        for quorum in root.get_sections_mut(Some("quorum")) {
            quorum.set_attribute("wait_for_all", "1");
        }
        assert!(
            root.get_sections(Some("quorum"))
                .all(|q| q.last_attribute("wait_for_all") == Some("1"))
        );
    }

    #[test]
    fn test_is_empty() {
        let mut section = Section::new("device");
        assert!(section.is_empty());
        section.add_section(Section::new("net"));
        assert!(!section.is_empty());

        let mut other = Section::new("quorum");
        other.add_attribute("provider", "corosync_votequorum");
        assert!(!other.is_empty());
    }
}
