//! Structured resume record produced by the extractor

use crate::processing::taxonomy;
use serde::{Deserialize, Serialize};

/// Placeholder used when no plausible name line is found
pub const PLACEHOLDER_NAME: &str = "Candidate Name";

/// Maximum number of experience lines kept on a record
pub const MAX_EXPERIENCES: usize = 6;

/// Maximum number of education lines kept on a record
pub const MAX_EDUCATION: usize = 3;

/// Fields extracted from free-form resume text.
///
/// Every optional field is an explicit `Option`: `None` means the extractor
/// found nothing, never "found an empty string". Records are immutable
/// snapshots; each parse or optimize produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "linkedIn", default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_for: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Database,
    DevOps,
    Tools,
    SoftSkills,
    Other,
}

/// Skills of one category, in record order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            email: None,
            phone: None,
            linkedin: None,
            portfolio: None,
            skills: Vec::new(),
            experiences: Vec::new(),
            education: Vec::new(),
            summary: None,
            optimized_for: None,
        }
    }
}

impl ResumeRecord {
    /// True when the name is the placeholder rather than a detected line
    pub fn has_placeholder_name(&self) -> bool {
        self.name == PLACEHOLDER_NAME
    }

    /// Contact fields that are present, in display order (email, phone)
    pub fn contact_items(&self) -> Vec<&str> {
        [self.email.as_deref(), self.phone.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Group skills by taxonomy category. Categories appear in taxonomy
    /// order; skills outside the taxonomy land in `Other`.
    pub fn skills_by_category(&self) -> Vec<SkillGroup> {
        let mut groups: Vec<SkillGroup> = Vec::new();

        for skill in &self.skills {
            let category = taxonomy::category_of(skill).unwrap_or(SkillCategory::Other);
            match groups.iter_mut().find(|g| g.category == category) {
                Some(group) => group.skills.push(skill.clone()),
                None => groups.push(SkillGroup {
                    category,
                    skills: vec![skill.clone()],
                }),
            }
        }

        groups.sort_by_key(|g| g.category);
        groups
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillCategory::Languages => write!(f, "Languages"),
            SkillCategory::Frontend => write!(f, "Frontend"),
            SkillCategory::Backend => write!(f, "Backend"),
            SkillCategory::Database => write!(f, "Database"),
            SkillCategory::DevOps => write!(f, "DevOps"),
            SkillCategory::Tools => write!(f, "Tools"),
            SkillCategory::SoftSkills => write!(f, "Soft Skills"),
            SkillCategory::Other => write!(f, "Other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_uses_placeholder_name() {
        let record = ResumeRecord::default();
        assert_eq!(record.name, PLACEHOLDER_NAME);
        assert!(record.has_placeholder_name());
        assert!(record.contact_items().is_empty());
    }

    #[test]
    fn test_skills_grouped_in_category_order() {
        let record = ResumeRecord {
            skills: vec![
                "Leadership".to_string(),
                "Rust".to_string(),
                "React".to_string(),
                "Underwater Basket Weaving".to_string(),
                "Python".to_string(),
            ],
            ..ResumeRecord::default()
        };

        let groups = record.skills_by_category();
        let categories: Vec<SkillCategory> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![
                SkillCategory::Languages,
                SkillCategory::Frontend,
                SkillCategory::SoftSkills,
                SkillCategory::Other,
            ]
        );
        assert_eq!(groups[0].skills, vec!["Rust", "Python"]);
    }

    #[test]
    fn test_serialization_uses_camel_case_and_skips_absent_fields() {
        let record = ResumeRecord {
            name: "Jane Doe".to_string(),
            linkedin: Some("https://linkedin.com/in/jane".to_string()),
            optimized_for: Some("Frontend Developer".to_string()),
            ..ResumeRecord::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["linkedIn"], "https://linkedin.com/in/jane");
        assert_eq!(json["optimizedFor"], "Frontend Developer");
        assert!(json.get("email").is_none());
        assert!(json.get("summary").is_none());
    }
}
