//! Removal of sections left empty by mutations

use crate::section::Section;

/// Recursively drop children that have no attributes and no children.
///
/// Children are pruned first, so a section whose only content was empty
/// subsections is removed as well. `parent` itself is never removed.
pub(crate) fn remove_empty_sections(parent: &mut Section) {
    parent.retain_sections_mut(|section| {
        remove_empty_sections(section);
        !section.is_empty()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::parse;

    #[test]
    fn test_prunes_nested_empty_sections() {
        let mut root = parse(
            r#"
quorum {
    device {
        net {
        }
    }
}
totem {
    version: 2
    interface {
    }
}
"#,
        )
        .unwrap();
        remove_empty_sections(&mut root);

        assert_eq!(root.get_sections(Some("quorum")).count(), 0);
        let totem = root.get_sections(Some("totem")).next().unwrap();
        assert_eq!(totem.get_sections(None).count(), 0);
        assert_eq!(totem.last_attribute("version"), Some("2"));
    }

    #[test]
    fn test_keeps_non_empty_sections() {
        let mut root = parse("quorum {\n device {\n model: net\n }\n}\n").unwrap();
        let before = root.clone();
        remove_empty_sections(&mut root);
        assert_eq!(root, before);
    }

    #[test]
    fn test_empty_root_stays() {
        let mut root = Section::root();
        remove_empty_sections(&mut root);
        assert!(root.is_empty());
    }
}
