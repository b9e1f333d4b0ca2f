use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{limits, ResumeDocument};

/// A single validation failure, addressed by field path
/// (e.g. `header.name`, `education[2].school`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates a whole document, collecting every failure instead of stopping
/// at the first. An empty result means the document may be rendered.
pub fn validate(doc: &ResumeDocument) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_required(&mut errors, "header.name", &doc.header.name);
    check_len(&mut errors, "header.name", &doc.header.name, limits::MAX_NAME_LENGTH);
    for (field, value) in [
        ("header.phone", &doc.header.phone),
        ("header.email", &doc.header.email),
        ("header.linkedin", &doc.header.linkedin),
        ("header.github", &doc.header.github),
        ("header.website", &doc.header.website),
    ] {
        if let Some(v) = value {
            check_len(&mut errors, field, v, limits::MAX_FIELD_LENGTH);
        }
    }

    if doc.education.is_empty() {
        errors.push(FieldError::new(
            "education",
            "At least one education entry is required",
        ));
    }
    check_count(
        &mut errors,
        "education",
        doc.education.len(),
        limits::MAX_EDUCATION_ENTRIES,
    );
    check_unique_ids(&mut errors, "education", doc.education.iter().map(|e| e.id));
    for (i, edu) in doc.education.iter().enumerate() {
        check_required(&mut errors, format!("education[{i}].school"), &edu.school);
        check_required(&mut errors, format!("education[{i}].degree"), &edu.degree);
        for (name, value) in [
            ("school", &edu.school),
            ("location", &edu.location),
            ("degree", &edu.degree),
            ("dates", &edu.dates),
        ] {
            check_len(
                &mut errors,
                format!("education[{i}].{name}"),
                value,
                limits::MAX_FIELD_LENGTH,
            );
        }
        if let Some(extra) = &edu.extra {
            check_len(
                &mut errors,
                format!("education[{i}].extra"),
                extra,
                limits::MAX_FIELD_LENGTH,
            );
        }
    }

    check_count(
        &mut errors,
        "experience",
        doc.experience.len(),
        limits::MAX_EXPERIENCE_ENTRIES,
    );
    check_unique_ids(&mut errors, "experience", doc.experience.iter().map(|e| e.id));
    for (i, exp) in doc.experience.iter().enumerate() {
        check_required(
            &mut errors,
            format!("experience[{i}].organization"),
            &exp.organization,
        );
        check_required(&mut errors, format!("experience[{i}].role"), &exp.role);
        for (name, value) in [
            ("organization", &exp.organization),
            ("location", &exp.location),
            ("role", &exp.role),
            ("dates", &exp.dates),
        ] {
            check_len(
                &mut errors,
                format!("experience[{i}].{name}"),
                value,
                limits::MAX_FIELD_LENGTH,
            );
        }
        check_bullets(&mut errors, format!("experience[{i}]"), &exp.bullets);
    }

    check_count(
        &mut errors,
        "projects",
        doc.projects.len(),
        limits::MAX_PROJECT_ENTRIES,
    );
    check_unique_ids(&mut errors, "projects", doc.projects.iter().map(|p| p.id));
    for (i, proj) in doc.projects.iter().enumerate() {
        check_required(&mut errors, format!("projects[{i}].name"), &proj.name);
        for (name, value) in [
            ("name", &proj.name),
            ("techStack", &proj.tech_stack),
            ("dates", &proj.dates),
        ] {
            check_len(
                &mut errors,
                format!("projects[{i}].{name}"),
                value,
                limits::MAX_FIELD_LENGTH,
            );
        }
        check_bullets(&mut errors, format!("projects[{i}]"), &proj.bullets);
    }

    check_count(
        &mut errors,
        "skills",
        doc.skills.len(),
        limits::MAX_SKILL_CATEGORIES,
    );
    check_unique_ids(&mut errors, "skills", doc.skills.iter().map(|s| s.id));
    for (i, cat) in doc.skills.iter().enumerate() {
        check_required(&mut errors, format!("skills[{i}].name"), &cat.name);
        check_len(
            &mut errors,
            format!("skills[{i}].name"),
            &cat.name,
            limits::MAX_FIELD_LENGTH,
        );
        if cat.items.len() > limits::MAX_SKILLS_PER_CATEGORY {
            errors.push(FieldError::new(
                format!("skills[{i}].items"),
                format!(
                    "Too many items ({} > {})",
                    cat.items.len(),
                    limits::MAX_SKILLS_PER_CATEGORY
                ),
            ));
        }
        for (j, item) in cat.items.iter().enumerate() {
            check_len(
                &mut errors,
                format!("skills[{i}].items[{j}]"),
                item,
                limits::MAX_FIELD_LENGTH,
            );
        }
    }

    // Total-size ceiling, reported with the measured size against the limit.
    match serde_json::to_string(doc) {
        Ok(json) if json.len() > limits::MAX_TOTAL_SIZE_BYTES => {
            errors.push(FieldError::new(
                "root",
                format!(
                    "Resume data exceeds maximum size ({} bytes > {} bytes)",
                    json.len(),
                    limits::MAX_TOTAL_SIZE_BYTES
                ),
            ));
        }
        Ok(_) => {}
        Err(e) => errors.push(FieldError::new("root", format!("Unserializable document: {e}"))),
    }

    errors
}

fn check_required(errors: &mut Vec<FieldError>, field: impl Into<String>, value: &str) {
    if value.trim().is_empty() {
        let field = field.into();
        let message = format!("{field} is required");
        errors.push(FieldError { field, message });
    }
}

fn check_len(errors: &mut Vec<FieldError>, field: impl Into<String>, value: &str, max: usize) {
    if value.len() > max {
        errors.push(FieldError::new(
            field,
            format!("Too long ({} > {} characters)", value.len(), max),
        ));
    }
}

fn check_count(errors: &mut Vec<FieldError>, field: &str, count: usize, max: usize) {
    if count > max {
        errors.push(FieldError::new(
            field,
            format!("Too many entries ({count} > {max})"),
        ));
    }
}

/// Blank bullets are legal (the renderer drops them); only length and count
/// ceilings apply here.
fn check_bullets(errors: &mut Vec<FieldError>, prefix: String, bullets: &[String]) {
    if bullets.len() > limits::MAX_BULLETS_PER_ENTRY {
        errors.push(FieldError::new(
            format!("{prefix}.bullets"),
            format!(
                "Too many bullets ({} > {})",
                bullets.len(),
                limits::MAX_BULLETS_PER_ENTRY
            ),
        ));
    }
    for (j, bullet) in bullets.iter().enumerate() {
        check_len(
            errors,
            format!("{prefix}.bullets[{j}]"),
            bullet,
            limits::MAX_BULLET_LENGTH,
        );
    }
}

fn check_unique_ids(
    errors: &mut Vec<FieldError>,
    field: &str,
    ids: impl Iterator<Item = Uuid>,
) {
    let mut seen = HashSet::new();
    for (i, id) in ids.enumerate() {
        if !seen.insert(id) {
            errors.push(FieldError::new(
                format!("{field}[{i}].id"),
                format!("Duplicate id {id}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeDocument};

    #[test]
    fn test_sample_document_is_valid() {
        assert!(validate(&ResumeDocument::sample()).is_empty());
    }

    #[test]
    fn test_missing_name_reported() {
        let mut doc = ResumeDocument::sample();
        doc.header.name = "   ".to_string();
        let errors = validate(&doc);
        assert!(errors.iter().any(|e| e.field == "header.name"));
    }

    #[test]
    fn test_empty_education_reported() {
        let mut doc = ResumeDocument::sample();
        doc.education.clear();
        let errors = validate(&doc);
        assert!(errors.iter().any(|e| e.field == "education"));
    }

    #[test]
    fn test_errors_are_collected_not_fail_fast() {
        let mut doc = ResumeDocument::sample();
        doc.header.name = String::new();
        doc.education[0].school = String::new();
        doc.education[0].degree = String::new();
        let errors = validate(&doc);
        assert!(errors.len() >= 3);
        assert!(errors.iter().any(|e| e.field == "education[0].school"));
        assert!(errors.iter().any(|e| e.field == "education[0].degree"));
    }

    #[test]
    fn test_field_paths_carry_indices() {
        let mut doc = ResumeDocument::sample();
        let mut second = ExperienceEntry::empty();
        second.organization = "Org".to_string();
        doc.experience.push(second);
        let errors = validate(&doc);
        assert!(errors.iter().any(|e| e.field == "experience[1].role"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut doc = ResumeDocument::sample();
        let mut dup = EducationEntry::empty();
        dup.id = doc.education[0].id;
        dup.school = "Other U".to_string();
        dup.degree = "M.S.".to_string();
        doc.education.push(dup);
        let errors = validate(&doc);
        assert!(errors.iter().any(|e| e.field == "education[1].id"));
    }

    #[test]
    fn test_too_many_education_entries() {
        let mut doc = ResumeDocument::sample();
        for _ in 0..limits::MAX_EDUCATION_ENTRIES + 1 {
            let mut e = EducationEntry::empty();
            e.school = "S".to_string();
            e.degree = "D".to_string();
            doc.education.push(e);
        }
        let errors = validate(&doc);
        assert!(errors.iter().any(|e| e.field == "education"));
    }

    #[test]
    fn test_blank_bullets_are_not_errors() {
        let mut doc = ResumeDocument::sample();
        doc.experience[0].bullets = vec!["".to_string(), "  ".to_string()];
        assert!(validate(&doc).is_empty());
    }

    #[test]
    fn test_overlong_bullet_reported() {
        let mut doc = ResumeDocument::sample();
        doc.experience[0].bullets = vec!["x".repeat(limits::MAX_BULLET_LENGTH + 1)];
        let errors = validate(&doc);
        assert!(errors
            .iter()
            .any(|e| e.field == "experience[0].bullets[0]"));
    }

    #[test]
    fn test_total_size_ceiling_reports_measured_size() {
        let mut doc = ResumeDocument::sample();
        // Stay inside every per-field and per-count limit while exceeding
        // the total size ceiling.
        for _ in 0..9 {
            let mut e = ExperienceEntry::empty();
            e.organization = "Org".to_string();
            e.role = "Role".to_string();
            e.bullets = vec!["y".repeat(limits::MAX_BULLET_LENGTH); 10];
            doc.experience.push(e);
        }
        for _ in 0..9 {
            let mut p = crate::models::resume::ProjectEntry::empty();
            p.name = "Proj".to_string();
            p.bullets = vec!["z".repeat(limits::MAX_BULLET_LENGTH); 10];
            doc.projects.push(p);
        }
        let errors = validate(&doc);
        let root = errors.iter().find(|e| e.field == "root").unwrap();
        assert!(root.message.contains("maximum size"));
        assert!(root.message.contains("50000"));
    }
}
