//! Document Synthesizer — resume record + style descriptor → self-contained
//! HTML document.
//!
//! # Architecture
//! - `build_document` is the single public entry point. It never fails:
//!   missing data degrades to omitted blocks or neutral placeholders.
//! - The skeleton is selected once, on `style.layout`. `Sidebar` splits the
//!   page into a colored side panel (identity, contact, skills) and a main
//!   panel; `Standard` stacks every section in one column under a header
//!   banner.
//! - Output is deterministic: the same `(resume, style)` pair always yields
//!   byte-identical markup. No timestamps, no randomness.
//!
//! All user-supplied text is escaped in `sections.rs` before it is embedded.

pub mod escape;
pub mod sections;

use crate::models::resume::ResumeRecord;
use crate::style::{LayoutKind, StyleDescriptor};
use crate::synthesis::escape::escape_html;

/// Builds the complete HTML document for one render job.
pub fn build_document(resume: &ResumeRecord, style: &StyleDescriptor) -> String {
    let title = resume
        .personal_info
        .full_name
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| "Resume".to_string());

    let body = match style.layout {
        LayoutKind::Standard => standard_skeleton(resume),
        LayoutKind::Sidebar => sidebar_skeleton(resume),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Resume - {title}</title>\n\
         <style>\n{css}</style>\n\
         </head>\n\
         <body>\n{body}</body>\n\
         </html>\n",
        title = title,
        css = stylesheet(style),
        body = body,
    )
}

/// One column, header banner first, every section in document order.
fn standard_skeleton(resume: &ResumeRecord) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"container\">\n");
    sections::header(&mut out, &resume.personal_info);
    sections::summary(&mut out, resume.summary.as_deref());
    sections::experience(&mut out, &resume.experience);
    sections::education(&mut out, &resume.education);
    sections::skills(&mut out, &resume.skills);
    sections::certifications(&mut out, &resume.certifications);
    sections::projects(&mut out, &resume.projects);
    out.push_str("</div>\n");
    out
}

/// Two regions: identity/contact/skills in the side panel, everything else
/// in the main panel.
fn sidebar_skeleton(resume: &ResumeRecord) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"container split\">\n<aside class=\"sidebar\">\n");
    sections::panel_identity(&mut out, &resume.personal_info);
    sections::skills(&mut out, &resume.skills);
    out.push_str("</aside>\n<div class=\"main-content\">\n");
    sections::summary(&mut out, resume.summary.as_deref());
    sections::experience(&mut out, &resume.experience);
    sections::education(&mut out, &resume.education);
    sections::certifications(&mut out, &resume.certifications);
    sections::projects(&mut out, &resume.projects);
    out.push_str("</div>\n</div>\n");
    out
}

/// Inline stylesheet derived from the style descriptor. The sidebar rules
/// are emitted only for the sidebar skeleton so the two layouts cannot
/// interfere.
fn stylesheet(style: &StyleDescriptor) -> String {
    let mut css = format!(
        "* {{ margin: 0; padding: 0; box-sizing: border-box; }}\n\
         body {{ font-family: {font}; line-height: 1.3; color: #333; background: white; font-size: 12px; }}\n\
         .container {{ max-width: 8.5in; margin: 0 auto; padding: 0.4in; background: white; height: 10.5in; overflow: hidden; }}\n\
         .header {{ text-align: center; margin-bottom: 30px; padding-bottom: 20px; border-bottom: 2px solid {primary}; }}\n\
         .name {{ font-size: 28px; font-weight: bold; color: {primary}; margin-bottom: 10px; }}\n\
         .contact-info {{ font-size: 14px; color: #666; }}\n\
         .contact-info span {{ margin: 0 10px; }}\n\
         .section {{ margin-bottom: 15px; }}\n\
         .section-title {{ font-size: 14px; font-weight: bold; color: {primary}; border-bottom: 1px solid #ddd; padding-bottom: 3px; margin-bottom: 8px; }}\n\
         .summary {{ font-size: 14px; line-height: 1.6; text-align: justify; }}\n\
         .experience-item, .education-item {{ margin-bottom: 8px; }}\n\
         .item-header {{ display: flex; justify-content: space-between; align-items: center; margin-bottom: 3px; }}\n\
         .position, .degree {{ font-weight: bold; font-size: 13px; }}\n\
         .company, .institution {{ color: {accent}; font-weight: 500; }}\n\
         .date {{ color: #666; font-size: 14px; }}\n\
         .description {{ font-size: 14px; margin-left: 15px; color: #555; }}\n\
         .skills-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 10px; }}\n\
         .skill-item {{ background: {secondary}; padding: 8px 12px; border-radius: 5px; border-left: 3px solid {primary}; }}\n\
         .skill-name {{ font-weight: 500; }}\n\
         .skill-level {{ font-size: 12px; color: #666; }}\n\
         @media print {{ body {{ -webkit-print-color-adjust: exact; }} .container {{ padding: 0.3in; }} }}\n",
        font = style.font_family,
        primary = style.primary_color,
        secondary = style.secondary_color,
        accent = style.accent_color,
    );

    if style.layout == LayoutKind::Sidebar {
        css.push_str(&format!(
            ".container.split {{ display: flex; padding: 0; }}\n\
             .sidebar {{ width: 35%; background: {primary}; color: white; padding: 0.5in; }}\n\
             .main-content {{ width: 65%; padding: 0.5in; }}\n\
             .sidebar .name {{ color: white; }}\n\
             .sidebar .contact-info {{ color: rgba(255,255,255,0.85); }}\n\
             .sidebar .section-title {{ color: white; border-bottom: 1px solid rgba(255,255,255,0.3); }}\n\
             .sidebar .skill-item {{ background: rgba(255,255,255,0.1); border-left: 3px solid white; color: white; }}\n",
            primary = style.primary_color,
        ));
    }

    css
}
