//! Fixed keyword tables driving extraction, scoring and role targeting

use crate::processing::record::SkillCategory;

/// Skill keywords by category. Order here is the order skills appear on a
/// record. Names are canonical spellings; matching is case-insensitive.
pub const SKILL_TAXONOMY: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Languages,
        &[
            "JavaScript", "TypeScript", "Python", "Java", "Rust", "Golang", "C++", "C#",
            "Ruby", "PHP", "Swift", "Kotlin", "Scala",
        ],
    ),
    (
        SkillCategory::Frontend,
        &[
            "React", "Vue", "Angular", "Svelte", "Next.js", "Redux", "HTML", "CSS", "SASS",
            "Tailwind", "Accessibility", "Responsive Design", "Web Performance",
        ],
    ),
    (
        SkillCategory::Backend,
        &[
            "Node.js", "Express", "Django", "Flask", "Spring", ".NET", "REST", "GraphQL",
            "gRPC", "API", "API Design", "Microservices", "System Architecture",
            "System Design", "Full-Stack Development",
        ],
    ),
    (
        SkillCategory::Database,
        &[
            "SQL", "NoSQL", "PostgreSQL", "MySQL", "MongoDB", "Redis", "SQLite", "DynamoDB",
            "Elasticsearch", "Database Design",
        ],
    ),
    (
        SkillCategory::DevOps,
        &[
            "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "Ansible", "Jenkins",
            "CI/CD", "Linux", "DevOps", "Infrastructure as Code", "Monitoring",
        ],
    ),
    (
        SkillCategory::Tools,
        &[
            "Git", "Jira", "Figma", "Webpack", "Agile", "Scrum", "Pandas", "NumPy",
            "TensorFlow", "PyTorch", "Machine Learning", "Data Analysis", "Statistics",
        ],
    ),
    (
        SkillCategory::SoftSkills,
        &[
            "Leadership", "Communication", "Problem Solving", "Teamwork", "Collaboration",
            "Mentoring", "Code Review", "Project Management", "Strategic Planning",
            "Cross-functional", "Stakeholder Management", "Product Strategy",
            "User Research", "Roadmapping",
        ],
    ),
];

/// Past-tense action verbs recognised in achievement bullets
pub const ACTION_VERBS: &[&str] = &[
    "Developed", "Implemented", "Designed", "Led", "Managed", "Created", "Built", "Optimized",
    "Improved", "Delivered", "Launched", "Architected", "Scaled", "Reduced", "Increased",
    "Streamlined",
];

/// Lowercase fragments marking a line as education
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "university", "college", "institute", "bachelor", "master", "phd", "ph.d", "degree",
    "b.s.", "b.a.", "m.s.", "m.a.", "b.sc", "m.sc", "mba",
];

/// Job-title words that mark a line as experience-like
pub const JOB_TITLE_KEYWORDS: &[&str] = &[
    "engineer", "developer", "manager", "designer", "analyst", "lead", "senior", "junior",
];

/// Section words an ATS expects to find somewhere in the text
pub const SECTION_WORDS: &[&str] = &["skills", "experience", "education", "summary"];

/// Headings whose following line is taken as the summary
pub const SUMMARY_HEADINGS: &[&str] = &["summary", "objective", "profile", "about"];

/// Role keyword group and the skills it suggests
#[derive(Debug, Clone, Copy)]
pub struct RoleSkills {
    pub label: &'static str,
    pub triggers: &'static [&'static str],
    pub skills: &'static [&'static str],
}

/// Role keyword table, checked in order against the lowercased role
pub const ROLE_SKILL_TABLE: &[RoleSkills] = &[
    RoleSkills {
        label: "frontend",
        triggers: &["front", "ui", "ux"],
        skills: &["Accessibility", "Responsive Design", "Web Performance"],
    },
    RoleSkills {
        label: "backend",
        triggers: &["back", "server"],
        skills: &["API Design", "Database Design", "System Architecture"],
    },
    RoleSkills {
        label: "full-stack",
        triggers: &["full", "stack"],
        skills: &["Full-Stack Development", "System Design", "DevOps"],
    },
    RoleSkills {
        label: "devops",
        triggers: &["devops", "cloud", "sre", "platform"],
        skills: &["CI/CD", "Infrastructure as Code", "Monitoring"],
    },
    RoleSkills {
        label: "leadership",
        triggers: &["lead", "senior", "manager"],
        skills: &["Leadership", "Mentoring", "Code Review"],
    },
    RoleSkills {
        label: "data",
        triggers: &["data", "ml", "ai"],
        skills: &["Data Analysis", "Machine Learning", "Statistics"],
    },
    RoleSkills {
        label: "product",
        triggers: &["product"],
        skills: &["Product Strategy", "User Research", "Roadmapping"],
    },
];

/// Suggested when no role group matches
pub const DEFAULT_ROLE_SKILLS: &[&str] = &["Problem Solving", "Communication", "Collaboration"];

/// Taxonomy category of a canonical skill name (case-sensitive)
pub fn category_of(skill: &str) -> Option<SkillCategory> {
    SKILL_TAXONOMY
        .iter()
        .find(|(_, keywords)| keywords.contains(&skill))
        .map(|(category, _)| *category)
}

/// All taxonomy keywords in record order
pub fn all_skills() -> impl Iterator<Item = (SkillCategory, &'static str)> {
    SKILL_TAXONOMY
        .iter()
        .flat_map(|(category, keywords)| keywords.iter().map(move |k| (*category, *k)))
}
