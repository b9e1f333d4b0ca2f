//! LaTeX dialect: sb2nov-style template, per-character escaping, five pure
//! section renderers.

pub mod escape;
pub mod sections;
pub mod template;

use crate::models::resume::{
    ContactInfo, EducationEntry, ExperienceEntry, FormattingSettings, ProjectEntry, SkillCategory,
};
use crate::render::{MarkupRenderer, SectionFragments, TemplateFlavor};

pub struct LatexRenderer;

impl MarkupRenderer for LatexRenderer {
    fn flavor(&self) -> TemplateFlavor {
        TemplateFlavor::Latex
    }

    fn render_header(&self, header: &ContactInfo) -> String {
        sections::render_header(header)
    }

    fn render_education(&self, entries: &[EducationEntry]) -> String {
        sections::render_education(entries)
    }

    fn render_experience(&self, entries: &[ExperienceEntry]) -> String {
        sections::render_experience(entries)
    }

    fn render_projects(&self, entries: &[ProjectEntry]) -> String {
        sections::render_projects(entries)
    }

    fn render_skills(&self, categories: &[SkillCategory]) -> String {
        sections::render_skills(categories)
    }

    // The LaTeX template ships a fixed preamble; formatting overrides only
    // apply to the Typst dialect.
    fn assemble(&self, fragments: &SectionFragments, _: Option<&FormattingSettings>) -> String {
        sections::assemble(
            &fragments.header,
            &fragments.education,
            &fragments.experience,
            &fragments.projects,
            &fragments.skills,
        )
    }
}
