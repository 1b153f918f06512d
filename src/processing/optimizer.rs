use crate::processing::record::ResumeRecord;
use crate::processing::taxonomy::{RoleSkills, DEFAULT_ROLE_SKILLS, ROLE_SKILL_TABLE};
use log::debug;

/// Augments a record's skills with suggestions for a target role.
///
/// Every role group whose trigger appears in the lowercased role
/// contributes, in table order. The default suggestions apply only when no
/// group matches.
pub struct Optimizer {
    table: &'static [RoleSkills],
    fallback: &'static [&'static str],
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer {
    pub fn new() -> Self {
        Self {
            table: ROLE_SKILL_TABLE,
            fallback: DEFAULT_ROLE_SKILLS,
        }
    }

    /// Role groups triggered by `role`, in table order
    pub fn matching_groups(&self, role: &str) -> Vec<&'static RoleSkills> {
        let role = role.to_lowercase();
        self.table
            .iter()
            .filter(|group| group.triggers.iter().any(|trigger| role.contains(trigger)))
            .collect()
    }

    /// Skills suggested for `role`, deduplicated, in table order
    pub fn suggested_skills(&self, role: &str) -> Vec<&'static str> {
        let groups = self.matching_groups(role);
        if groups.is_empty() {
            return self.fallback.to_vec();
        }

        let mut suggestions: Vec<&'static str> = Vec::new();
        for skill in groups.iter().flat_map(|group| group.skills.iter().copied()) {
            if !suggestions.contains(&skill) {
                suggestions.push(skill);
            }
        }
        suggestions
    }

    /// New record with the role's suggested skills appended to the existing
    /// ones and `optimized_for` set to `role` verbatim. Existing skills keep
    /// their order; a suggestion already present under any casing is skipped.
    pub fn optimize_for_role(&self, record: &ResumeRecord, role: &str) -> ResumeRecord {
        let mut skills = record.skills.clone();

        for suggestion in self.suggested_skills(role) {
            if !skills.iter().any(|s| s.eq_ignore_ascii_case(suggestion)) {
                skills.push(suggestion.to_string());
            }
        }

        debug!(
            "Optimized for '{}': {} -> {} skills",
            role,
            record.skills.len(),
            skills.len()
        );

        ResumeRecord {
            skills,
            optimized_for: Some(role.to_string()),
            ..record.clone()
        }
    }
}
