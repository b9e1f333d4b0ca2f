use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hard ceilings enforced by validation. Oversized documents are rejected
/// before they ever reach the renderer.
pub mod limits {
    pub const MAX_NAME_LENGTH: usize = 100;
    pub const MAX_FIELD_LENGTH: usize = 200;
    pub const MAX_BULLET_LENGTH: usize = 500;
    pub const MAX_BULLETS_PER_ENTRY: usize = 10;
    pub const MAX_EDUCATION_ENTRIES: usize = 5;
    pub const MAX_EXPERIENCE_ENTRIES: usize = 10;
    pub const MAX_PROJECT_ENTRIES: usize = 10;
    pub const MAX_SKILL_CATEGORIES: usize = 10;
    pub const MAX_SKILLS_PER_CATEGORY: usize = 20;
    /// Whole serialized document, in bytes.
    pub const MAX_TOTAL_SIZE_BYTES: usize = 50_000;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub school: String,
    pub location: String,
    pub degree: String,
    pub dates: String,
    pub extra: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    /// Rendered as the bold heading. Kept distinct from `role` on purpose:
    /// the template puts the organization on the heading line and the role
    /// on the italic subheading line.
    pub organization: String,
    pub location: String,
    pub role: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: Uuid,
    pub name: String,
    pub tech_stack: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<String>,
}

/// Numeric layout overrides. Every field is independently optional; absent
/// fields fall back to the template defaults in `render::typst`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingSettings {
    pub margin_left: Option<f64>,
    pub margin_right: Option<f64>,
    pub margin_top: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub base_font_size: Option<f64>,
    pub par_leading: Option<f64>,
    pub name_font_size: Option<f64>,
    pub name_spacing: Option<f64>,
    pub contact_font_size: Option<f64>,
    pub contact_spacing: Option<f64>,
    pub section_font_size: Option<f64>,
    pub item_font_size: Option<f64>,
    pub list_indent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub header: ContactInfo,
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub formatting: Option<FormattingSettings>,
}

impl EducationEntry {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            school: String::new(),
            location: String::new(),
            degree: String::new(),
            dates: String::new(),
            extra: None,
        }
    }
}

impl ExperienceEntry {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            organization: String::new(),
            location: String::new(),
            role: String::new(),
            dates: String::new(),
            bullets: vec![String::new()],
        }
    }
}

impl ProjectEntry {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            tech_stack: String::new(),
            dates: String::new(),
            bullets: vec![String::new()],
        }
    }
}

impl SkillCategory {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            items: vec![],
        }
    }
}

impl ResumeDocument {
    /// A small, valid document used as the starter content and in tests.
    pub fn sample() -> Self {
        Self {
            header: ContactInfo {
                name: "Jane Doe".to_string(),
                phone: Some("123-456-7890".to_string()),
                email: Some("jane@example.com".to_string()),
                linkedin: Some("linkedin.com/in/janedoe".to_string()),
                github: Some("github.com/janedoe".to_string()),
                website: None,
            },
            education: vec![EducationEntry {
                id: Uuid::new_v4(),
                school: "State University".to_string(),
                location: "Springfield, IL".to_string(),
                degree: "B.S. in Computer Science".to_string(),
                dates: "Aug 2018 -- May 2022".to_string(),
                extra: None,
            }],
            experience: vec![ExperienceEntry {
                id: Uuid::new_v4(),
                organization: "Acme Corp".to_string(),
                location: "Remote".to_string(),
                role: "Software Engineer".to_string(),
                dates: "Jun 2022 -- Present".to_string(),
                bullets: vec![
                    "Reduced API p99 latency by 40% by introducing a read-through cache"
                        .to_string(),
                    "Led migration of 12 services to containerized deployments".to_string(),
                ],
            }],
            projects: vec![ProjectEntry {
                id: Uuid::new_v4(),
                name: "Resume Builder".to_string(),
                tech_stack: "Rust, Axum, LaTeX".to_string(),
                dates: "2024".to_string(),
                bullets: vec!["Form-driven editor with live PDF preview".to_string()],
            }],
            skills: vec![SkillCategory {
                id: Uuid::new_v4(),
                name: "Languages".to_string(),
                items: vec![
                    "Rust".to_string(),
                    "Python".to_string(),
                    "TypeScript".to_string(),
                ],
            }],
            formatting: None,
        }
    }
}
