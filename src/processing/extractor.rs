//! Heuristic field extraction from raw resume text

use crate::processing::record::{ResumeRecord, SkillCategory, MAX_EDUCATION, MAX_EXPERIENCES, PLACEHOLDER_NAME};
use crate::processing::taxonomy::{self, EDUCATION_KEYWORDS, JOB_TITLE_KEYWORDS, SUMMARY_HEADINGS};
use crate::processing::text_processor::TextProcessor;
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;

/// Name candidates at or above this many characters are rejected
const MAX_NAME_CHARS: usize = 50;
/// Experience candidates at or above this many characters are rejected
const MAX_EXPERIENCE_CHARS: usize = 200;
/// Education candidates at or above this many characters are rejected
const MAX_EDUCATION_CHARS: usize = 150;
/// Minimum digits in a phone number match
const MIN_PHONE_DIGITS: usize = 8;

/// Converts free-form text into a [`ResumeRecord`]. Never fails: a field
/// that cannot be found is left absent.
pub struct Extractor {
    text_processor: TextProcessor,
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    portfolio_regex: Regex,
    digit_run_regex: Regex,
    year_range_regex: Regex,
    at_regex: Regex,
    dash_regex: Regex,
    title_regex: Regex,
    heading_regex: Regex,
    summary_regex: Regex,
    skill_matchers: Vec<SkillMatcher>,
    education_matcher: AhoCorasick,
}

struct SkillMatcher {
    skill: &'static str,
    category: SkillCategory,
    regex: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let phone_regex = Regex::new(r"\+?\(?\d[\d \t().\-]{6,}\d")
            .expect("Invalid phone regex");

        let linkedin_regex = Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[\w-]+")
            .expect("Invalid LinkedIn regex");

        let portfolio_regex = Regex::new(r"(?i)(?:https?://)?(?:www\.)?[\w-]*\.?(?:github|portfolio)\.(?:com|io)/[\w-]+")
            .expect("Invalid portfolio regex");

        let digit_run_regex = Regex::new(r"\d{3,}").expect("Invalid digit run regex");

        let year_range_regex = Regex::new(r"^\(?\d{4}\s*[-–]\s*\d{4}\)?$").expect("Invalid year range regex");

        let at_regex = Regex::new(r"(?i)\S\s+(?:at|@)\s+\S").expect("Invalid 'at' regex");

        let dash_regex = Regex::new(r"\S\s+[-–—]\s+\S").expect("Invalid dash regex");

        let title_regex = Regex::new(&format!(r"(?i)\b(?:{})s?\b", JOB_TITLE_KEYWORDS.join("|")))
            .expect("Invalid job title regex");

        let heading_regex = Regex::new(r"(?i)^(?:skills|experience|work experience|education|summary|objective|profile|about)(?:\s+me)?\s*:?$")
            .expect("Invalid heading regex");

        let summary_regex = Regex::new(&format!(r"(?i)^(?:{})", SUMMARY_HEADINGS.join("|")))
            .expect("Invalid summary regex");

        let skill_matchers = taxonomy::all_skills()
            .map(|(category, skill)| SkillMatcher {
                skill,
                category,
                regex: Regex::new(&Self::skill_pattern(skill)).expect("Invalid skill regex"),
            })
            .collect();

        let education_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(EDUCATION_KEYWORDS)
            .expect("Invalid education keywords");

        Self {
            text_processor: TextProcessor::new(),
            email_regex,
            phone_regex,
            linkedin_regex,
            portfolio_regex,
            digit_run_regex,
            year_range_regex,
            at_regex,
            dash_regex,
            title_regex,
            heading_regex,
            summary_regex,
            skill_matchers,
            education_matcher,
        }
    }

    /// Extract every field from `text`
    pub fn parse(&self, text: &str) -> ResumeRecord {
        let lines = self.text_processor.lines(text);

        let record = ResumeRecord {
            name: self.extract_name(&lines),
            email: self.extract_email(text),
            phone: self.extract_phone(text),
            linkedin: self.extract_linkedin(text),
            portfolio: self.extract_portfolio(text),
            skills: self.extract_skills(text),
            experiences: self.extract_experiences(&lines),
            education: self.extract_education(&lines),
            summary: self.extract_summary(&lines),
            optimized_for: None,
        };

        debug!(
            "Parsed {} lines: name={:?}, {} skills, {} experiences, {} education entries",
            lines.len(),
            record.name,
            record.skills.len(),
            record.experiences.len(),
            record.education.len()
        );

        record
    }

    /// First line, unless it looks like contact data or is too long
    pub fn extract_name(&self, lines: &[&str]) -> String {
        match lines.first() {
            Some(first)
                if !first.contains('@')
                    && !self.digit_run_regex.is_match(first)
                    && !first.to_lowercase().contains("http")
                    && first.chars().count() < MAX_NAME_CHARS =>
            {
                first.to_string()
            }
            _ => PLACEHOLDER_NAME.to_string(),
        }
    }

    pub fn extract_email(&self, text: &str) -> Option<String> {
        self.email_regex.find(text).map(|m| m.as_str().to_string())
    }

    /// First separator-laden digit run with enough digits to be a phone
    /// number. Year ranges such as "2018 - 2021" are skipped.
    pub fn extract_phone(&self, text: &str) -> Option<String> {
        self.phone_regex
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|candidate| !self.year_range_regex.is_match(candidate))
            .find(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS)
            .map(str::to_string)
    }

    pub fn extract_linkedin(&self, text: &str) -> Option<String> {
        self.linkedin_regex
            .find(text)
            .map(|m| Self::normalize_url(m.as_str()))
    }

    pub fn extract_portfolio(&self, text: &str) -> Option<String> {
        self.portfolio_regex
            .find(text)
            .map(|m| Self::normalize_url(m.as_str()))
    }

    /// Taxonomy keywords present as whole words, in taxonomy order
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut skills: Vec<String> = Vec::new();

        for matcher in &self.skill_matchers {
            if matcher.regex.is_match(text) && !skills.iter().any(|s| s == matcher.skill) {
                debug!("Skill hit: {} ({})", matcher.skill, matcher.category);
                skills.push(matcher.skill.to_string());
            }
        }

        skills
    }

    /// Lines shaped like "Title at Company", "Title - Company",
    /// "Title, Company" or carrying a job-title word
    pub fn extract_experiences(&self, lines: &[&str]) -> Vec<String> {
        lines
            .iter()
            .filter(|line| line.chars().count() < MAX_EXPERIENCE_CHARS)
            .filter(|line| !self.is_heading(line))
            .filter(|line| self.is_experience_shaped(line))
            .take(MAX_EXPERIENCES)
            .map(|line| line.to_string())
            .collect()
    }

    pub fn extract_education(&self, lines: &[&str]) -> Vec<String> {
        lines
            .iter()
            .filter(|line| line.chars().count() < MAX_EDUCATION_CHARS)
            .filter(|line| self.is_education_line(line))
            .take(MAX_EDUCATION)
            .map(|line| line.to_string())
            .collect()
    }

    /// The line right after the first summary-like heading
    pub fn extract_summary(&self, lines: &[&str]) -> Option<String> {
        let heading = lines.iter().position(|line| self.summary_regex.is_match(line))?;
        lines.get(heading + 1).map(|line| line.to_string())
    }

    /// A bare "X, Y" pair is too weak to count when the line is
    /// education or contact data
    fn is_experience_shaped(&self, line: &str) -> bool {
        if self.at_regex.is_match(line) || self.dash_regex.is_match(line) || self.title_regex.is_match(line) {
            return true;
        }

        Self::is_single_comma_pair(line) && !self.is_education_line(line) && !self.is_contact_line(line)
    }

    /// "X, Y" with exactly one comma, so comma-separated lists do not count
    fn is_single_comma_pair(line: &str) -> bool {
        let mut parts = line.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(left), Some(right), None) => !left.trim().is_empty() && !right.trim().is_empty(),
            _ => false,
        }
    }

    fn is_education_line(&self, line: &str) -> bool {
        self.education_matcher.is_match(line)
    }

    fn is_heading(&self, line: &str) -> bool {
        self.heading_regex.is_match(line)
    }

    fn is_contact_line(&self, line: &str) -> bool {
        self.email_regex.is_match(line) || self.linkedin_regex.is_match(line) || self.portfolio_regex.is_match(line)
    }

    /// Whole-word, case-insensitive pattern for a skill keyword. Keywords
    /// starting or ending in punctuation ("C++", ".NET") cannot use `\b` on
    /// that side, and word separators inside a keyword accept either
    /// spaces or hyphens.
    fn skill_pattern(skill: &str) -> String {
        let body = skill
            .split(|c: char| c == ' ' || c == '-')
            .filter(|part| !part.is_empty())
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"[\s\-]+");

        let starts_word = skill.chars().next().is_some_and(|c| c.is_alphanumeric() || c == '_');
        let ends_word = skill.chars().last().is_some_and(|c| c.is_alphanumeric() || c == '_');

        let prefix = if starts_word { r"\b" } else { r"(?:^|[^\w])" };
        let suffix = if ends_word { r"\b" } else { r"(?:[^\w]|$)" };

        format!("(?i){}{}{}", prefix, body, suffix)
    }

    fn normalize_url(fragment: &str) -> String {
        if fragment.to_lowercase().starts_with("http") {
            fragment.to_string()
        } else {
            format!("https://{}", fragment)
        }
    }
}
