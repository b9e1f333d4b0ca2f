//! Per-section Typst fragment renderers. Fragments are calls to the helper
//! functions defined in the template skeleton; all user text is passed as
//! escaped string literals.

use crate::models::resume::{
    ContactInfo, EducationEntry, ExperienceEntry, ProjectEntry, SkillCategory,
};
use crate::render::url::{clean_url_for_display, format_url_for_href};

use super::escape::{str_array, str_literal};
use super::template;

pub fn render_header(header: &ContactInfo) -> String {
    let mut contact_items: Vec<String> = Vec::new();

    if let Some(phone) = blank_to_none(header.phone.as_deref()) {
        contact_items.push(str_literal(phone));
    }
    if let Some(email) = blank_to_none(header.email.as_deref()) {
        contact_items.push(format!(
            "link({}, {})",
            str_literal(&format!("mailto:{email}")),
            str_literal(email)
        ));
    }
    for field in [
        header.linkedin.as_deref(),
        header.github.as_deref(),
        header.website.as_deref(),
    ] {
        if let Some(url) = blank_to_none(field) {
            contact_items.push(format!(
                "link({}, {})",
                str_literal(&format_url_for_href(url)),
                str_literal(&clean_url_for_display(url))
            ));
        }
    }

    let contact = if contact_items.is_empty() {
        "()".to_string()
    } else {
        format!("({},)", contact_items.join(", "))
    };

    format!(
        "#resume-header({}, {})",
        str_literal(&header.name),
        contact
    )
}

pub fn render_education(education: &[EducationEntry]) -> String {
    education
        .iter()
        .map(|edu| {
            let mut fragment = format!(
                "#entry({}, {}, {}, {})",
                str_literal(&edu.school),
                str_literal(&edu.dates),
                str_literal(&edu.degree),
                str_literal(&edu.location)
            );
            if let Some(extra) = blank_to_none(edu.extra.as_deref()) {
                fragment.push_str(&format!("\n#bullet-list(({},))", str_literal(extra)));
            }
            fragment
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_bullets(bullets: &[String]) -> String {
    let valid: Vec<&str> = bullets
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect();
    if valid.is_empty() {
        return String::new();
    }
    format!("#bullet-list({})", str_array(&valid))
}

pub fn render_experience(experience: &[ExperienceEntry]) -> String {
    if experience.is_empty() {
        return String::new();
    }

    let mut lines = vec!["#section(\"Experience\")".to_string()];
    for exp in experience {
        // organization on the bold heading line, role on the italic
        // subheading line, matching the LaTeX dialect.
        lines.push(format!(
            "#entry({}, {}, {}, {})",
            str_literal(&exp.organization),
            str_literal(&exp.dates),
            str_literal(&exp.role),
            str_literal(&exp.location)
        ));
        let bullets = render_bullets(&exp.bullets);
        if !bullets.is_empty() {
            lines.push(bullets);
        }
    }
    lines.join("\n")
}

pub fn render_projects(projects: &[ProjectEntry]) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let mut lines = vec!["#section(\"Projects\")".to_string()];
    for proj in projects {
        let stack = if proj.tech_stack.trim().is_empty() {
            "none".to_string()
        } else {
            str_literal(&proj.tech_stack)
        };
        lines.push(format!(
            "#project-heading({}, {}, {})",
            str_literal(&proj.name),
            stack,
            str_literal(&proj.dates)
        ));
        let bullets = render_bullets(&proj.bullets);
        if !bullets.is_empty() {
            lines.push(bullets);
        }
    }
    lines.join("\n")
}

pub fn render_skills(skills: &[SkillCategory]) -> String {
    let category_lines: Vec<String> = skills
        .iter()
        .filter_map(|cat| {
            let items: Vec<&str> = cat
                .items
                .iter()
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .collect();
            if items.is_empty() {
                return None;
            }
            Some(format!(
                "#skill-line({}, {})",
                str_literal(&cat.name),
                str_array(&items)
            ))
        })
        .collect();

    if category_lines.is_empty() {
        return String::new();
    }

    let mut lines = vec!["#section(\"Technical Skills\")".to_string()];
    lines.extend(category_lines);
    lines.join("\n")
}

/// Substitute the formatting dictionary and the five section fragments into
/// the skeleton, first occurrence each.
pub fn assemble(
    format_dict: &str,
    header: &str,
    education: &str,
    experience: &str,
    projects: &str,
    skills: &str,
) -> String {
    template::TEMPLATE
        .replacen(template::FORMAT_SLOT, format_dict, 1)
        .replacen(template::HEADER_SLOT, header, 1)
        .replacen(template::EDUCATION_SLOT, education, 1)
        .replacen(template::EXPERIENCE_SLOT, experience, 1)
        .replacen(template::PROJECTS_SLOT, projects, 1)
        .replacen(template::SKILLS_SLOT, skills, 1)
}

fn blank_to_none(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeDocument;

    fn sample() -> ResumeDocument {
        ResumeDocument::sample()
    }

    #[test]
    fn test_header_renders_contact_links() {
        let out = render_header(&sample().header);
        assert!(out.starts_with("#resume-header(\"Jane Doe\","));
        assert!(out.contains("\"123-456-7890\""));
        assert!(out.contains("link(\"mailto:jane@example.com\", \"jane@example.com\")"));
        assert!(out.contains("link(\"https://github.com/janedoe\", \"github.com/janedoe\")"));
    }

    #[test]
    fn test_header_without_contacts_gets_empty_array() {
        let out = render_header(&ContactInfo {
            name: "Solo".to_string(),
            ..Default::default()
        });
        assert_eq!(out, "#resume-header(\"Solo\", ())");
    }

    #[test]
    fn test_header_escapes_quotes_in_name() {
        let out = render_header(&ContactInfo {
            name: "J \"Ace\" D".to_string(),
            ..Default::default()
        });
        assert!(out.contains("\"J \\\"Ace\\\" D\""));
    }

    #[test]
    fn test_education_entry_order_and_count() {
        let mut doc = sample();
        let mut second = doc.education[0].clone();
        second.school = "Other College".to_string();
        doc.education.push(second);
        let out = render_education(&doc.education);
        assert_eq!(out.matches("#entry(").count(), 2);
        assert!(out.find("State University").unwrap() < out.find("Other College").unwrap());
    }

    #[test]
    fn test_empty_experience_renders_nothing() {
        assert_eq!(render_experience(&[]), "");
    }

    #[test]
    fn test_experience_field_mapping() {
        let out = render_experience(&sample().experience);
        assert!(out.contains("#section(\"Experience\")"));
        assert!(out.contains("#entry(\"Acme Corp\", \"Jun 2022 -- Present\", \"Software Engineer\", \"Remote\")"));
    }

    #[test]
    fn test_bullets_filter_blanks_and_trim() {
        let bullets = vec!["".to_string(), "  ".to_string(), " Did X ".to_string()];
        let out = render_bullets(&bullets);
        assert_eq!(out, "#bullet-list((\"Did X\",))");
        assert_eq!(render_bullets(&["  ".to_string()]), "");
    }

    #[test]
    fn test_project_without_tech_stack_passes_none() {
        let mut proj = sample().projects[0].clone();
        proj.tech_stack = "  ".to_string();
        let out = render_projects(&[proj]);
        assert!(out.contains("#project-heading(\"Resume Builder\", none, \"2024\")"));
    }

    #[test]
    fn test_skills_suppressed_when_empty() {
        assert_eq!(render_skills(&[]), "");
        let mut cat = sample().skills[0].clone();
        cat.items = vec![" ".to_string()];
        assert_eq!(render_skills(&[cat]), "");
    }

    #[test]
    fn test_assemble_fills_all_slots() {
        let out = assemble("(margin-left: 0.5)", "H", "EDU", "EXP", "PROJ", "SK");
        assert!(out.contains("#let fmt = (margin-left: 0.5)"));
        for fragment in ["H", "EDU", "EXP", "PROJ", "SK"] {
            assert!(out.contains(fragment));
        }
        assert!(!out.contains("{{"));
    }
}
