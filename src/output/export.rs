//! Clean resume documents rendered from a record: plain text and a
//! standalone HTML page

use crate::config::ExportFormat;
use crate::error::Result;
use crate::processing::ResumeRecord;
use askama::Template;

/// Standalone HTML resume page
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume: {{ name }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1e293b;
            max-width: 800px;
            margin: 0 auto;
            padding: 24px;
            background: #ffffff;
        }
        .resume-header {
            background: linear-gradient(90deg, #1e293b, #334155);
            color: #ffffff;
            padding: 24px;
            border-radius: 12px 12px 0 0;
        }
        .resume-header h1 { margin: 0; font-size: 1.75rem; }
        .contact { display: flex; flex-wrap: wrap; gap: 16px; margin-top: 8px; color: #cbd5e1; font-size: 0.9rem; }
        .contact a { color: #cbd5e1; }
        .badge {
            display: inline-block;
            margin-top: 8px;
            padding: 2px 10px;
            border-radius: 999px;
            background: #4f46e5;
            font-size: 0.8rem;
        }
        .resume-body { border: 1px solid #e2e8f0; border-top: none; padding: 24px; border-radius: 0 0 12px 12px; }
        h2 { font-size: 1.1rem; border-bottom: 1px solid #e2e8f0; padding-bottom: 4px; }
        .skills { display: flex; flex-wrap: wrap; gap: 8px; }
        .skill { padding: 2px 8px; background: #f1f5f9; border-radius: 6px; font-size: 0.9rem; }
        .empty { color: #94a3b8; }
        footer { margin-top: 24px; color: #94a3b8; font-size: 0.8rem; text-align: center; }
        @media print {
            body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
        }
    </style>
    {% endif %}
</head>
<body>
    <main>
        <article class="resume-preview" role="document" aria-label="Resume">
            <header class="resume-header">
                <h1>{{ name }}</h1>
                <div class="contact">
                    {% if let Some(email) = email %}<span>{{ email }}</span>{% endif %}
                    {% if let Some(phone) = phone %}<span>{{ phone }}</span>{% endif %}
                    {% if let Some(linkedin) = linkedin %}<a href="{{ linkedin }}">{{ linkedin }}</a>{% endif %}
                    {% if let Some(portfolio) = portfolio %}<a href="{{ portfolio }}">{{ portfolio }}</a>{% endif %}
                </div>
                {% if let Some(role) = optimized_for %}<span class="badge">Optimized for {{ role }}</span>{% endif %}
            </header>

            <div class="resume-body">
                {% if let Some(summary) = summary %}
                <section aria-labelledby="summary-heading">
                    <h2 id="summary-heading">Summary</h2>
                    <p>{{ summary }}</p>
                </section>
                {% endif %}

                <section aria-labelledby="skills-heading">
                    <h2 id="skills-heading">Skills</h2>
                    <div class="skills">
                        {% for skill in skills %}<span class="skill">{{ skill }}</span>{% endfor %}
                    </div>
                </section>

                <section aria-labelledby="experience-heading">
                    <h2 id="experience-heading">Experience</h2>
                    <ul>
                        {% if experiences.is_empty() %}<li class="empty">No experience entries detected</li>{% endif %}
                        {% for experience in experiences %}<li>{{ experience }}</li>{% endfor %}
                    </ul>
                </section>

                <section aria-labelledby="education-heading">
                    <h2 id="education-heading">Education</h2>
                    <ul>
                        {% if education.is_empty() %}<li class="empty">No education entries detected</li>{% endif %}
                        {% for entry in education %}<li>{{ entry }}</li>{% endfor %}
                    </ul>
                </section>
            </div>
        </article>
        <footer>Generated by ResumeCraft on {{ generated_on }}</footer>
    </main>
</body>
</html>"#, ext = "html")]
struct ResumeHtmlTemplate<'a> {
    include_styles: bool,
    name: &'a str,
    email: Option<&'a str>,
    phone: Option<&'a str>,
    linkedin: Option<&'a str>,
    portfolio: Option<&'a str>,
    summary: Option<&'a str>,
    optimized_for: Option<&'a str>,
    skills: &'a [String],
    experiences: &'a [String],
    education: &'a [String],
    generated_on: String,
}

pub struct HtmlExporter {
    include_styles: bool,
}

impl HtmlExporter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    /// Full HTML document; every record field is escaped
    pub fn render(&self, record: &ResumeRecord) -> Result<String> {
        let template = ResumeHtmlTemplate {
            include_styles: self.include_styles,
            name: &record.name,
            email: record.email.as_deref(),
            phone: record.phone.as_deref(),
            linkedin: record.linkedin.as_deref(),
            portfolio: record.portfolio.as_deref(),
            summary: record.summary.as_deref(),
            optimized_for: record.optimized_for.as_deref(),
            skills: &record.skills,
            experiences: &record.experiences,
            education: &record.education,
            generated_on: chrono::Local::now().format("%Y-%m-%d").to_string(),
        };
        Ok(template.render()?)
    }
}

/// Plain-text resume. Sections appear in a fixed order and absent ones are
/// left out entirely.
pub fn plain_text(record: &ResumeRecord) -> String {
    let mut lines: Vec<String> = vec![record.name.clone()];

    let contact = record.contact_items();
    if !contact.is_empty() {
        lines.push(contact.join(" | "));
    }
    if let Some(linkedin) = &record.linkedin {
        lines.push(linkedin.clone());
    }
    if let Some(portfolio) = &record.portfolio {
        lines.push(portfolio.clone());
    }

    if let Some(summary) = &record.summary {
        lines.extend([String::new(), "SUMMARY".to_string(), summary.clone()]);
    }

    if !record.skills.is_empty() {
        lines.extend([String::new(), "SKILLS".to_string(), record.skills.join(", ")]);
    }

    if !record.experiences.is_empty() {
        lines.extend([String::new(), "EXPERIENCE".to_string()]);
        lines.extend(record.experiences.iter().map(|e| format!("• {}", e)));
    }

    if !record.education.is_empty() {
        lines.extend([String::new(), "EDUCATION".to_string()]);
        lines.extend(record.education.iter().cloned());
    }

    lines.join("\n")
}

/// Render `record` in `format`
pub fn export(record: &ResumeRecord, format: ExportFormat, include_styles: bool) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(plain_text(record)),
        ExportFormat::Html => HtmlExporter::new(include_styles).render(record),
    }
}

pub fn suggest_filename(format: ExportFormat, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        ExportFormat::Text => format!("resume{}.txt", timestamp_suffix),
        ExportFormat::Html => format!("resume{}.html", timestamp_suffix),
    }
}
