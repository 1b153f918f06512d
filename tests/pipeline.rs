//! End-to-end checks of parse, analyze and optimize over a corpus of inputs

use resumecraft::output::export::plain_text;
use resumecraft::processing::record::{MAX_EDUCATION, MAX_EXPERIENCES, PLACEHOLDER_NAME};
use resumecraft::{analyze, optimize_for_role, parse, ResumeRecord};
use std::collections::HashSet;

const JANE: &str = "Jane Doe\njane@example.com\n(555) 111-2222\nSenior Engineer at Acme - improved throughput by 25%\nB.S. Computer Science, State University";

fn sample_resume() -> String {
    std::fs::read_to_string("tests/fixtures/sample_resume.txt").unwrap()
}

/// Inputs chosen to stress each extraction rule
fn corpus() -> Vec<String> {
    let mut inputs: Vec<String> = vec![
        String::new(),
        " ".to_string(),
        "\n\n\n".to_string(),
        JANE.to_string(),
        sample_resume(),
        "jane@example.com".to_string(),
        "12345678901234567890".to_string(),
        "https://linkedin.com/in/someone".to_string(),
        "Rust rust RUST Rust, rust".to_string(),
        "C++ C# .NET Node.js CI/CD c++ node.js".to_string(),
        "履歴書 ソフトウェアエンジニア 東京大学".to_string(),
        "┌──────────┬─────────┐\n│ Skills   │ Python  │\n└──────────┴─────────┘".to_string(),
        "Name\t\tJane\nRole\t\tEngineer".to_string(),
        "$$$ %%% ((( ))) [[[ ]]] *** +++ ???".to_string(),
        "a".repeat(10_000),
        "🚀 Rocket Engineer at 🌕 Moon Corp".to_string(),
    ];

    let many_roles: String = (0..20)
        .map(|i| format!("Engineer at Company {}\n", i))
        .collect();
    inputs.push(many_roles);

    let many_schools: String = (0..10)
        .map(|i| format!("University number {}\n", i))
        .collect();
    inputs.push(many_schools);

    inputs
}

#[test]
fn test_name_never_empty() {
    for input in corpus() {
        let record = parse(&input);
        assert!(!record.name.is_empty(), "empty name for {:?}", input);
    }
}

#[test]
fn test_skills_never_duplicated() {
    for input in corpus() {
        let record = parse(&input);
        let unique: HashSet<&String> = record.skills.iter().collect();
        assert_eq!(unique.len(), record.skills.len(), "duplicates in {:?}", record.skills);
    }
}

#[test]
fn test_caps_hold() {
    for input in corpus() {
        let record = parse(&input);
        assert!(record.experiences.len() <= MAX_EXPERIENCES);
        assert!(record.education.len() <= MAX_EDUCATION);

        let report = analyze(&record, &input);
        assert!(report.strengths.len() <= 5);
        assert!(report.weaknesses.len() <= 5);
        assert!(report.improvements.len() <= 6);
    }

    let record = parse(&corpus()[corpus().len() - 2]);
    assert_eq!(record.experiences.len(), MAX_EXPERIENCES);
    assert_eq!(record.experiences[0], "Engineer at Company 0");
}

#[test]
fn test_scores_within_bounds() {
    for input in corpus() {
        let record = parse(&input);
        let report = analyze(&record, &input);

        assert!(report.overall_score <= 100);
        assert!(report.ats_score <= 100);
        for (section, score) in report.section_scores.iter() {
            assert!(score <= 100, "{} out of range: {}", section, score);
        }
    }
}

#[test]
fn test_analysis_deterministic() {
    for input in corpus() {
        let record = parse(&input);
        let first = serde_json::to_vec(&analyze(&record, &input)).unwrap();
        let second = serde_json::to_vec(&analyze(&record, &input)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_parallel_analysis_matches_sequential() {
    let inputs = corpus();
    let sequential: Vec<_> = inputs
        .iter()
        .map(|input| analyze(&parse(input), input))
        .collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || analyze(&parse(input), input)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn test_jane_scenario() {
    let record = parse(JANE);

    assert_eq!(record.name, "Jane Doe");
    assert_eq!(record.email.as_deref(), Some("jane@example.com"));
    assert_eq!(record.phone.as_deref(), Some("(555) 111-2222"));
    assert_eq!(record.experiences.len(), 1);
    assert!(record.experiences[0].contains("Acme"));
    assert_eq!(record.education.len(), 1);
    assert!(record.education[0].contains("State University"));

    let report = analyze(&record, JANE);
    assert!(report.ats_score > 0);
    assert!(report.strengths.iter().any(|s| s.contains("percentages")));
}

#[test]
fn test_empty_scenario() {
    let record = parse("");

    assert_eq!(record.name, PLACEHOLDER_NAME);
    assert!(record.email.is_none());
    assert!(record.phone.is_none());
    assert!(record.linkedin.is_none());
    assert!(record.skills.is_empty());
    assert!(record.experiences.is_empty());
    assert!(record.education.is_empty());

    let report = analyze(&record, "");
    assert_eq!(report.overall_score, 40);
    let messages: Vec<&str> = report.weaknesses.iter().map(|w| w.message.as_str()).collect();
    assert!(messages.iter().any(|m| m.contains("brief")));
    assert!(messages.iter().any(|m| m.contains("quantified")));
}

#[test]
fn test_frontend_optimization_scenario() {
    let record = parse(&sample_resume());
    let optimized = optimize_for_role(&record, "Frontend Developer");

    for skill in &record.skills {
        assert!(optimized.skills.contains(skill), "{} was dropped", skill);
    }
    assert!(optimized.skills.iter().any(|s| s == "Accessibility"));
    assert!(optimized.skills.iter().any(|s| s == "Responsive Design"));
    assert_eq!(optimized.optimized_for.as_deref(), Some("Frontend Developer"));

    let report = analyze(&optimized, &sample_resume());
    assert!(report.overall_score >= analyze(&record, &sample_resume()).overall_score);
}

#[test]
fn test_optimize_idempotent_across_roles() {
    let record = parse(&sample_resume());

    for role in ["Frontend Developer", "Senior Backend Engineer", "SRE", "Data Scientist", "Chef", ""] {
        let once = optimize_for_role(&record, role);
        let twice = optimize_for_role(&once, role);
        assert_eq!(once.skills, twice.skills, "role {:?}", role);
    }
}

#[test]
fn test_sample_resume_fields() {
    let record = parse(&sample_resume());

    assert_eq!(record.name, "John Doe");
    assert_eq!(record.email.as_deref(), Some("john.doe@example.com"));
    assert_eq!(record.phone.as_deref(), Some("(415) 555-0134"));
    assert_eq!(record.linkedin.as_deref(), Some("https://linkedin.com/in/johndoe"));
    assert_eq!(record.portfolio.as_deref(), Some("https://github.com/johndoe"));
    assert!(record.summary.as_deref().unwrap().starts_with("Software Engineer with seven years"));
    for skill in ["JavaScript", "TypeScript", "React", "Node.js", "PostgreSQL", "Docker", "AWS", "Git", "CI/CD"] {
        assert!(record.skills.iter().any(|s| s == skill), "missing {}", skill);
    }
    assert!(!record.skills.iter().any(|s| s == "Java"));
    assert!(record.experiences.iter().any(|e| e.contains("Brightwave")));
    assert_eq!(record.education, vec!["B.S. Computer Science, University of Washington"]);

    let report = analyze(&record, &sample_resume());
    assert!(report.highlights.metrics.iter().any(|m| m == "40%"));
    assert!(report.highlights.metrics.iter().any(|m| m == "$120K"));
    assert_eq!(report.highlights.action_verbs[..3], ["Led", "Built", "Reduced"]);
}

#[test]
fn test_plain_text_round_trip() {
    for input in [JANE.to_string(), sample_resume(), String::new()] {
        let record = parse(&input);
        let reparsed = parse(&plain_text(&record));

        assert_eq!(reparsed.name, record.name);
        assert_eq!(reparsed.skills, record.skills);
        assert_eq!(reparsed.email, record.email);
        assert_eq!(reparsed.linkedin, record.linkedin);
    }
}

#[test]
fn test_record_json_round_trip() {
    let record = optimize_for_role(&parse(&sample_resume()), "Backend Engineer");
    let json = serde_json::to_string(&record).unwrap();
    let restored: ResumeRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, record);
}
