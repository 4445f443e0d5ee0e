//! Section emitters.
//!
//! Each emitter appends one self-contained block to the output buffer, or
//! nothing at all when its backing data is empty — no empty headings ever
//! reach the document. Missing leaf fields suppress only their own line;
//! identity slots fall back to neutral placeholders.

use std::fmt::Write;

use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, SkillEntry,
};
use crate::synthesis::escape::escape_html;

/// End-boundary token for a role the candidate still holds.
pub const PRESENT: &str = "Present";

fn or_placeholder(value: Option<&str>, placeholder: &'static str) -> String {
    match value {
        Some(v) => escape_html(v),
        None => placeholder.to_string(),
    }
}

/// Contact lines in fixed order; absent fields are skipped entirely.
fn contact_lines(info: &PersonalInfo) -> Vec<String> {
    let fields = [
        ("\u{1F4E7}", info.email.as_deref()),
        ("\u{1F4DE}", info.phone.as_deref()),
        ("\u{1F4CD}", info.address.as_deref()),
        ("\u{1F4BC}", info.linkedin.as_deref()),
        ("\u{1F310}", info.website.as_deref()),
    ];
    fields
        .iter()
        .filter_map(|(icon, value)| value.map(|v| format!("{icon} {}", escape_html(v))))
        .collect()
}

/// Header banner for the standard skeleton.
pub fn header(out: &mut String, info: &PersonalInfo) {
    out.push_str("<header class=\"header\">\n");
    writeln!(
        out,
        "<h1 class=\"name\">{}</h1>",
        or_placeholder(info.full_name.as_deref(), "Your Name")
    )
    .unwrap();
    out.push_str("<div class=\"contact-info\">");
    for line in contact_lines(info) {
        write!(out, "<span>{line}</span>").unwrap();
    }
    out.push_str("</div>\n</header>\n");
}

/// Identity block for the side panel: same data as `header`, stacked.
pub fn panel_identity(out: &mut String, info: &PersonalInfo) {
    writeln!(
        out,
        "<h1 class=\"name\">{}</h1>",
        or_placeholder(info.full_name.as_deref(), "Your Name")
    )
    .unwrap();
    out.push_str("<div class=\"contact-info\">\n");
    for line in contact_lines(info) {
        writeln!(out, "<div>{line}</div>").unwrap();
    }
    out.push_str("</div>\n");
}

pub fn summary(out: &mut String, summary: Option<&str>) {
    let Some(text) = summary.filter(|t| !t.trim().is_empty()) else {
        return;
    };
    out.push_str("<section class=\"section\">\n<h2 class=\"section-title\">Professional Summary</h2>\n");
    writeln!(out, "<p class=\"summary\">{}</p>", escape_html(text)).unwrap();
    out.push_str("</section>\n");
}

pub fn experience(out: &mut String, entries: &[ExperienceEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str(
        "<section class=\"section\">\n<h2 class=\"section-title\">Professional Experience</h2>\n",
    );
    for entry in entries {
        // `current` wins over any supplied end date.
        let end = if entry.current {
            PRESENT.to_string()
        } else {
            entry.end_date.as_deref().map(escape_html).unwrap_or_default()
        };
        let start = entry.start_date.as_deref().map(escape_html).unwrap_or_default();
        out.push_str("<div class=\"experience-item\">\n<div class=\"item-header\">\n<div>\n");
        writeln!(
            out,
            "<div class=\"position\">{}</div>",
            or_placeholder(entry.position.as_deref(), "Position")
        )
        .unwrap();
        writeln!(
            out,
            "<div class=\"company\">{}</div>",
            or_placeholder(entry.company.as_deref(), "Company")
        )
        .unwrap();
        out.push_str("</div>\n");
        writeln!(out, "<div class=\"date\">{start} - {end}</div>").unwrap();
        out.push_str("</div>\n");
        if let Some(description) = entry.description.as_deref() {
            writeln!(
                out,
                "<div class=\"description\">{}</div>",
                escape_html(description)
            )
            .unwrap();
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

pub fn education(out: &mut String, entries: &[EducationEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str("<section class=\"section\">\n<h2 class=\"section-title\">Education</h2>\n");
    for entry in entries {
        let mut degree = or_placeholder(entry.degree.as_deref(), "Degree");
        if let Some(field) = entry.field.as_deref() {
            write!(degree, " in {}", escape_html(field)).unwrap();
        }
        let start = entry.start_date.as_deref().map(escape_html).unwrap_or_default();
        let end = entry.end_date.as_deref().map(escape_html).unwrap_or_default();
        out.push_str("<div class=\"education-item\">\n<div class=\"item-header\">\n<div>\n");
        writeln!(out, "<div class=\"degree\">{degree}</div>").unwrap();
        writeln!(
            out,
            "<div class=\"institution\">{}</div>",
            or_placeholder(entry.institution.as_deref(), "Institution")
        )
        .unwrap();
        out.push_str("</div>\n");
        writeln!(out, "<div class=\"date\">{start} - {end}</div>").unwrap();
        out.push_str("</div>\n");
        if let Some(gpa) = entry.gpa.as_deref() {
            writeln!(out, "<div class=\"description\">GPA: {}</div>", escape_html(gpa)).unwrap();
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

pub fn skills(out: &mut String, entries: &[SkillEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str("<section class=\"section\">\n<h2 class=\"section-title\">Skills</h2>\n<div class=\"skills-grid\">\n");
    for entry in entries {
        out.push_str("<div class=\"skill-item\">\n");
        writeln!(
            out,
            "<div class=\"skill-name\">{}</div>",
            or_placeholder(entry.name.as_deref(), "Skill")
        )
        .unwrap();
        if let Some(level) = entry.level {
            writeln!(out, "<div class=\"skill-level\">{}</div>", level.as_str()).unwrap();
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</section>\n");
}

pub fn certifications(out: &mut String, entries: &[CertificationEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str("<section class=\"section\">\n<h2 class=\"section-title\">Certifications</h2>\n");
    for entry in entries {
        let date = entry.date.as_deref().map(escape_html).unwrap_or_default();
        out.push_str("<div class=\"experience-item\">\n<div class=\"item-header\">\n<div>\n");
        writeln!(
            out,
            "<div class=\"position\">{}</div>",
            or_placeholder(entry.name.as_deref(), "Certification")
        )
        .unwrap();
        writeln!(
            out,
            "<div class=\"company\">{}</div>",
            or_placeholder(entry.issuer.as_deref(), "Issuer")
        )
        .unwrap();
        out.push_str("</div>\n");
        writeln!(out, "<div class=\"date\">{date}</div>").unwrap();
        out.push_str("</div>\n</div>\n");
    }
    out.push_str("</section>\n");
}

pub fn projects(out: &mut String, entries: &[ProjectEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str("<section class=\"section\">\n<h2 class=\"section-title\">Projects</h2>\n");
    for entry in entries {
        let date = entry.date.as_deref().map(escape_html).unwrap_or_default();
        out.push_str("<div class=\"experience-item\">\n<div class=\"item-header\">\n<div>\n");
        writeln!(
            out,
            "<div class=\"position\">{}</div>",
            or_placeholder(entry.name.as_deref(), "Project")
        )
        .unwrap();
        if let Some(url) = entry.url.as_deref() {
            writeln!(out, "<div class=\"company\">{}</div>", escape_html(url)).unwrap();
        }
        out.push_str("</div>\n");
        writeln!(out, "<div class=\"date\">{date}</div>").unwrap();
        out.push_str("</div>\n");
        if let Some(description) = entry.description.as_deref() {
            writeln!(
                out,
                "<div class=\"description\">{}</div>",
                escape_html(description)
            )
            .unwrap();
        }
        if !entry.technologies.is_empty() {
            let techs: Vec<String> = entry.technologies.iter().map(|t| escape_html(t)).collect();
            writeln!(out, "<div class=\"description\">{}</div>", techs.join(", ")).unwrap();
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}
