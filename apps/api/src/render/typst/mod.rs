//! Typst dialect: same five-section shape as the LaTeX renderer, emitting
//! calls into a Typst helper prelude instead of LaTeX macros. This is the
//! dialect that honors `FormattingSettings`.

pub mod escape;
pub mod sections;
pub mod template;

use crate::models::resume::{
    ContactInfo, EducationEntry, ExperienceEntry, FormattingSettings, ProjectEntry, SkillCategory,
};
use crate::render::{MarkupRenderer, SectionFragments, TemplateFlavor};

pub struct TypstRenderer;

impl MarkupRenderer for TypstRenderer {
    fn flavor(&self) -> TemplateFlavor {
        TemplateFlavor::Typst
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

    fn assemble(
        &self,
        fragments: &SectionFragments,
        formatting: Option<&FormattingSettings>,
    ) -> String {
        sections::assemble(
            &template::format_settings_dict(formatting),
            &fragments.header,
            &fragments.education,
            &fragments.experience,
            &fragments.projects,
            &fragments.skills,
        )
    }
}
