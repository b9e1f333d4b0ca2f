//! Per-section LaTeX fragment renderers. Each is a pure function of its
//! validated section data; escaping happens here, never in the assembler.

use crate::models::resume::{
    ContactInfo, EducationEntry, ExperienceEntry, ProjectEntry, SkillCategory,
};

use crate::render::url::{clean_url_for_display, format_url_for_href};

use super::escape::{escape, escape_url, filter_blank_entries, format_bullet};
use super::template;

/// Name plus an ordered, conditionally-included contact line. Absent fields
/// are omitted; if no contact fields are present the separator line is
/// dropped entirely.
pub fn render_header(header: &ContactInfo) -> String {
    let name = escape(&header.name);

    let mut contact_items: Vec<String> = Vec::new();

    if let Some(phone) = blank_to_none(header.phone.as_deref()) {
        contact_items.push(format!("\\small {}", escape(phone)));
    }
    if let Some(email) = blank_to_none(header.email.as_deref()) {
        let mailto = format!("mailto:{email}");
        contact_items.push(format!(
            "\\href{{{}}}{{\\underline{{{}}}}}",
            escape_url(&mailto),
            escape(email)
        ));
    }
    for field in [
        header.linkedin.as_deref(),
        header.github.as_deref(),
        header.website.as_deref(),
    ] {
        if let Some(url) = blank_to_none(field) {
            contact_items.push(render_link(url));
        }
    }

    let mut lines = vec![
        "\\begin{center}".to_string(),
        format!("    \\textbf{{\\Huge \\scshape {name}}} \\\\ \\vspace{{1pt}}"),
    ];
    if !contact_items.is_empty() {
        lines.push(format!("    {}", contact_items.join(" $|$ ")));
    }
    lines.push("\\end{center}".to_string());

    lines.join("\n")
}

fn render_link(url: &str) -> String {
    let href = format_url_for_href(url);
    let display = clean_url_for_display(url);
    format!(
        "\\href{{{}}}{{\\underline{{{}}}}}",
        escape_url(&href),
        escape(&display)
    )
}

fn blank_to_none(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// One `\resumeSubheading` per entry, concatenated in input order. The list
/// wrapper lives in the template, not here.
pub fn render_education(education: &[EducationEntry]) -> String {
    education
        .iter()
        .map(|edu| {
            let mut fragment = format!(
                "    \\resumeSubheading\n      {{{}}}{{{}}}\n      {{{}}}{{{}}}",
                escape(&edu.school),
                escape(&edu.location),
                escape(&edu.degree),
                escape(&edu.dates)
            );
            if let Some(extra) = blank_to_none(edu.extra.as_deref()) {
                fragment.push_str(&format!(
                    "\n      \\resumeItem{{\\textit{{{}}}}}",
                    escape(extra)
                ));
            }
            fragment
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_bullets(bullets: &[String]) -> String {
    let valid = filter_blank_entries(bullets);
    if valid.is_empty() {
        return String::new();
    }

    let mut lines = vec!["          \\resumeItemListStart".to_string()];
    lines.extend(
        valid
            .iter()
            .map(|b| format!("            \\resumeItem{{{}}}", format_bullet(b))),
    );
    lines.push("          \\resumeItemListEnd".to_string());
    lines.join("\n")
}

fn render_experience_entry(exp: &ExperienceEntry) -> String {
    // Documented mapping: organization is the bold heading, role the italic
    // subheading. Do not swap these even though the names read the other way.
    let mut lines = vec![
        "    \\resumeSubheading".to_string(),
        format!("      {{{}}}{{{}}}", escape(&exp.organization), escape(&exp.dates)),
        format!("      {{{}}}{{{}}}", escape(&exp.role), escape(&exp.location)),
    ];

    let bullets = render_bullets(&exp.bullets);
    if !bullets.is_empty() {
        lines.push(bullets);
    }
    lines.join("\n")
}

/// Emits nothing at all for an empty list — the section heading must not
/// appear without entries.
pub fn render_experience(experience: &[ExperienceEntry]) -> String {
    if experience.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        "\\section{Experience}".to_string(),
        "  \\resumeSubHeadingListStart".to_string(),
    ];
    lines.extend(experience.iter().map(render_experience_entry));
    lines.push("  \\resumeSubHeadingListEnd".to_string());
    lines.join("\n")
}

fn render_project_entry(proj: &ProjectEntry) -> String {
    let name = escape(&proj.name);
    let title = if proj.tech_stack.trim().is_empty() {
        format!("\\textbf{{{name}}}")
    } else {
        format!("\\textbf{{{name}}} $|$ \\emph{{{}}}", escape(&proj.tech_stack))
    };

    let mut lines = vec![
        "    \\resumeProjectHeading".to_string(),
        format!("      {{{}}}{{{}}}", title, escape(&proj.dates)),
    ];

    let bullets = render_bullets(&proj.bullets);
    if !bullets.is_empty() {
        lines.push(bullets);
    }
    lines.join("\n")
}

pub fn render_projects(projects: &[ProjectEntry]) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        "\\section{Projects}".to_string(),
        "    \\resumeSubHeadingListStart".to_string(),
    ];
    lines.extend(projects.iter().map(render_project_entry));
    lines.push("    \\resumeSubHeadingListEnd".to_string());
    lines.join("\n")
}

/// One line per category; suppressed entirely when every category is empty
/// after blank filtering.
pub fn render_skills(skills: &[SkillCategory]) -> String {
    let category_lines: Vec<String> = skills
        .iter()
        .filter_map(|cat| {
            let items = filter_blank_entries(&cat.items);
            if items.is_empty() {
                return None;
            }
            let joined = items.iter().map(|i| escape(i)).collect::<Vec<_>>().join(", ");
            Some(format!("\\textbf{{{}}}{{: {}}} \\\\", escape(&cat.name), joined))
        })
        .collect();

    if category_lines.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        "\\section{Technical Skills}".to_string(),
        " \\begin{itemize}[leftmargin=0.15in, label={}]".to_string(),
        "    \\small{\\item{".to_string(),
    ];
    lines.extend(category_lines.iter().map(|l| format!("     {l}")));
    lines.push("    }}".to_string());
    lines.push(" \\end{itemize}".to_string());
    lines.join("\n")
}

/// Substitute the five fragments into the template, first occurrence each.
/// Inputs are already escaped; no user text reaches this function raw.
pub fn assemble(
    header: &str,
    education: &str,
    experience: &str,
    projects: &str,
    skills: &str,
) -> String {
    template::TEMPLATE
        .replacen(template::HEADER_SLOT, header, 1)
        .replacen(template::EDUCATION_SLOT, education, 1)
        .replacen(template::EXPERIENCE_SLOT, experience, 1)
        .replacen(template::PROJECTS_SLOT, projects, 1)
        .replacen(template::SKILLS_SLOT, skills, 1)
}
