//! corosync.conf text writer
//!
//! Renders a [`Section`] tree back into configuration text. Attributes are
//! written before child sections, nesting is indented by four spaces and a
//! blank line separates each section block from the content before it.
//! Output is lossless with respect to [`super::parse`]: parsing the exported
//! text yields an equal tree.

use super::Section;

const INDENT: &str = "    ";

/// Render the body of `section` (its attributes and children).
///
/// The section's own name is not written; pass the document root.
pub fn export(section: &Section) -> String {
    let mut output = String::new();
    write_body(section, 0, &mut output);
    output
}

fn write_body(section: &Section, depth: usize, output: &mut String) {
    let indent = INDENT.repeat(depth);

    let mut has_content = false;
    for (key, value) in section.get_attributes(None) {
        if value.is_empty() {
            output.push_str(&format!("{indent}{key}:\n"));
        } else {
            output.push_str(&format!("{indent}{key}: {value}\n"));
        }
        has_content = true;
    }

    for child in section.get_sections(None) {
        if has_content {
            output.push('\n');
        }
        output.push_str(&format!("{indent}{} {{\n", child.name()));
        write_body(child, depth + 1, output);
        output.push_str(&format!("{indent}}}\n"));
        has_content = true;
    }
}
