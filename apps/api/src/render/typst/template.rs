//! Fixed Typst skeleton. Helper functions mirror the LaTeX template's custom
//! commands; section fragments call them with already-escaped string
//! literals. Six insertion points: the five sections plus the formatting
//! dictionary.

use crate::models::resume::FormattingSettings;

pub const FORMAT_SLOT: &str = "{{FORMAT_SETTINGS}}";
pub const HEADER_SLOT: &str = "{{HEADER_SECTION}}";
pub const EDUCATION_SLOT: &str = "{{EDUCATION_SECTION}}";
pub const EXPERIENCE_SLOT: &str = "{{EXPERIENCE_SECTION}}";
pub const PROJECTS_SLOT: &str = "{{PROJECTS_SECTION}}";
pub const SKILLS_SLOT: &str = "{{SKILLS_SECTION}}";

pub const TEMPLATE: &str = r#"// Resume template (Typst)

#let fmt = {{FORMAT_SETTINGS}}

#set page(
  paper: "us-letter",
  margin: (
    left: fmt.margin-left * 1in,
    right: fmt.margin-right * 1in,
    top: fmt.margin-top * 1in,
    bottom: fmt.margin-bottom * 1in,
  ),
)
#set text(size: fmt.base-font-size * 1pt, font: "New Computer Modern")
#set par(leading: fmt.par-leading * 1em, justify: false)
#set list(indent: fmt.list-indent * 1in)
#show link: underline

#let resume-header(name, contact) = align(center)[
  #text(size: fmt.name-font-size * 1pt, weight: "bold")[#smallcaps(name)]
  #v(fmt.name-spacing * 1pt)
  #text(size: fmt.contact-font-size * 1pt)[
    #contact.join([ #h(fmt.contact-spacing * 1em) | #h(fmt.contact-spacing * 1em) ])
  ]
]

#let section(title) = {
  v(4pt)
  text(size: fmt.section-font-size * 1pt)[#smallcaps(title)]
  v(-6pt)
  line(length: 100%, stroke: 0.5pt)
  v(-2pt)
}

#let entry(heading, right1, subheading, right2) = {
  grid(
    columns: (1fr, auto),
    row-gutter: 3pt,
    text(weight: "bold")[#heading], align(right)[#right1],
    text(style: "italic", size: 0.9em)[#subheading],
    align(right)[#text(style: "italic", size: 0.9em)[#right2]],
  )
}

#let project-heading(name, stack, dates) = {
  grid(
    columns: (1fr, auto),
    if stack == none [*#name*] else [*#name* | #emph(stack)],
    align(right)[#dates],
  )
}

#let bullet-list(items) = {
  list(..items.map(b => text(size: fmt.item-font-size * 1pt)[#b]))
}

#let skill-line(category, items) = [
  *#category*: #items.join(", ") \
]

{{HEADER_SECTION}}

#section("Education")
{{EDUCATION_SECTION}}

{{EXPERIENCE_SECTION}}

{{PROJECTS_SECTION}}

{{SKILLS_SECTION}}
"#;

/// Render the formatting dictionary, falling back to the template defaults
/// for every absent field independently.
pub fn format_settings_dict(fmt: Option<&FormattingSettings>) -> String {
    let defaults = FormattingSettings::default();
    let fmt = fmt.unwrap_or(&defaults);
    let fields = [
        ("margin-left", fmt.margin_left, 0.5),
        ("margin-right", fmt.margin_right, 0.5),
        ("margin-top", fmt.margin_top, 0.5),
        ("margin-bottom", fmt.margin_bottom, 0.5),
        ("base-font-size", fmt.base_font_size, 11.0),
        ("par-leading", fmt.par_leading, 0.65),
        ("name-font-size", fmt.name_font_size, 26.0),
        ("name-spacing", fmt.name_spacing, 1.0),
        ("contact-font-size", fmt.contact_font_size, 10.0),
        ("contact-spacing", fmt.contact_spacing, 0.3),
        ("section-font-size", fmt.section_font_size, 12.0),
        ("item-font-size", fmt.item_font_size, 10.0),
        ("list-indent", fmt.list_indent, 0.15),
    ];
    let inner = fields
        .iter()
        .map(|(key, value, default)| format!("{key}: {}", value.unwrap_or(*default)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({inner})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_placeholder_occurs_exactly_once() {
        for slot in [
            FORMAT_SLOT,
            HEADER_SLOT,
            EDUCATION_SLOT,
            EXPERIENCE_SLOT,
            PROJECTS_SLOT,
            SKILLS_SLOT,
        ] {
            assert_eq!(TEMPLATE.matches(slot).count(), 1, "slot {slot}");
        }
    }

    #[test]
    fn test_format_defaults_when_absent() {
        let dict = format_settings_dict(None);
        assert!(dict.contains("margin-left: 0.5"));
        assert!(dict.contains("base-font-size: 11"));
        assert!(dict.contains("name-font-size: 26"));
        assert!(dict.contains("list-indent: 0.15"));
    }

    #[test]
    fn test_format_fields_default_independently() {
        let fmt = FormattingSettings {
            margin_left: Some(0.75),
            name_font_size: Some(22.0),
            ..Default::default()
        };
        let dict = format_settings_dict(Some(&fmt));
        assert!(dict.contains("margin-left: 0.75"));
        assert!(dict.contains("name-font-size: 22"));
        // Untouched fields keep their defaults.
        assert!(dict.contains("margin-right: 0.5"));
        assert!(dict.contains("par-leading: 0.65"));
    }
}
