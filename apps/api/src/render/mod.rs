//! Template rendering: a deterministic, pure mapping from a validated
//! `ResumeDocument` to typeset markup. Two dialect implementations share one
//! interface; callers select a dialect per request, never by code path.

pub mod latex;
pub mod typst;
pub mod url;

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    ContactInfo, EducationEntry, ExperienceEntry, FormattingSettings, ProjectEntry, ResumeDocument,
    SkillCategory,
};

/// Target markup dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFlavor {
    #[default]
    Latex,
    Typst,
}

impl TemplateFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateFlavor::Latex => "latex",
            TemplateFlavor::Typst => "typst",
        }
    }
}

/// The five rendered section fragments, already escaped.
pub struct SectionFragments {
    pub header: String,
    pub education: String,
    pub experience: String,
    pub projects: String,
    pub skills: String,
}

/// One markup dialect: an escaper, five section renderers, and an assembler.
/// Implementations are stateless; every method is a pure function of its
/// arguments.
pub trait MarkupRenderer: Send + Sync {
    fn flavor(&self) -> TemplateFlavor;
    fn render_header(&self, header: &ContactInfo) -> String;
    fn render_education(&self, entries: &[EducationEntry]) -> String;
    fn render_experience(&self, entries: &[ExperienceEntry]) -> String;
    fn render_projects(&self, entries: &[ProjectEntry]) -> String;
    fn render_skills(&self, categories: &[SkillCategory]) -> String;
    fn assemble(
        &self,
        fragments: &SectionFragments,
        formatting: Option<&FormattingSettings>,
    ) -> String;
}

pub fn renderer_for(flavor: TemplateFlavor) -> &'static dyn MarkupRenderer {
    match flavor {
        TemplateFlavor::Latex => &latex::LatexRenderer,
        TemplateFlavor::Typst => &typst::TypstRenderer,
    }
}

/// Render a validated document to complete markup source for one dialect.
///
/// Assumes validation has already passed; blank bullets and skill items are
/// filtered here, not rejected. Total: no input causes an error.
pub fn render_markup(doc: &ResumeDocument, flavor: TemplateFlavor) -> String {
    warn_on_injection_patterns(doc);

    let renderer = renderer_for(flavor);
    let fragments = SectionFragments {
        header: renderer.render_header(&doc.header),
        education: renderer.render_education(&doc.education),
        experience: renderer.render_experience(&doc.experience),
        projects: renderer.render_projects(&doc.projects),
        skills: renderer.render_skills(&doc.skills),
    };
    renderer.assemble(&fragments, doc.formatting.as_ref())
}

/// Defense in depth: the escapers already neutralize markup syntax, so a
/// flagged field is logged and escaped anyway rather than rejected.
fn warn_on_injection_patterns(doc: &ResumeDocument) {
    for (field, text) in text_fields(doc) {
        if !latex::escape::is_safe_input(text) {
            tracing::warn!(field = %field, "input contains raw markup-injection pattern");
        }
    }
}

fn text_fields(doc: &ResumeDocument) -> Vec<(String, &str)> {
    let mut fields: Vec<(String, &str)> = vec![("header.name".to_string(), &doc.header.name)];
    for (i, exp) in doc.experience.iter().enumerate() {
        for (j, bullet) in exp.bullets.iter().enumerate() {
            fields.push((format!("experience[{i}].bullets[{j}]"), bullet));
        }
    }
    for (i, proj) in doc.projects.iter().enumerate() {
        for (j, bullet) in proj.bullets.iter().enumerate() {
            fields.push((format!("projects[{i}].bullets[{j}]"), bullet));
        }
    }
    fields
}
