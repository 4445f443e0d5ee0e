//! Resume input model.
//!
//! The record is owned by the calling system and arrives fully resolved —
//! this engine never fetches or persists resume data. Every leaf field is
//! optional: the synthesizer substitutes placeholders or drops the line,
//! it never fails on missing data.
//!
//! Wire names follow the original client payloads: snake_case section keys
//! (`personal_info`), camelCase leaf fields (`fullName`, `startDate`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    /// Ignored when `current` is set — the rendered end boundary becomes "Present".
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillEntry {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_minimal_record() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "personal_info": { "fullName": "Jane Doe" }
        }))
        .unwrap();

        assert_eq!(record.personal_info.full_name.as_deref(), Some("Jane Doe"));
        assert!(record.summary.is_none());
        assert!(record.experience.is_empty());
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_deserializes_empty_object() {
        let record: ResumeRecord = serde_json::from_value(json!({})).unwrap();
        assert!(record.personal_info.full_name.is_none());
        assert!(record.education.is_empty());
    }

    #[test]
    fn test_leaf_fields_use_camel_case() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "personal_info": {},
            "experience": [{
                "company": "Acme",
                "startDate": "2020",
                "endDate": "2022",
                "current": false
            }],
            "education": [{ "startDate": "2015", "gpa": "3.9" }]
        }))
        .unwrap();

        assert_eq!(record.experience[0].start_date.as_deref(), Some("2020"));
        assert_eq!(record.education[0].gpa.as_deref(), Some("3.9"));
    }

    #[test]
    fn test_skill_level_parses_named_variants() {
        let skill: SkillEntry =
            serde_json::from_value(json!({ "name": "Rust", "level": "Expert" })).unwrap();
        assert_eq!(skill.level, Some(SkillLevel::Expert));
        assert_eq!(skill.level.unwrap().as_str(), "Expert");
    }
}
