//! Style Registry — maps template identifiers to immutable style descriptors.
//!
//! Pure lookup, no I/O. Eleven template names collapse onto two structural
//! skeletons (`LayoutKind`); everything else a template changes is cosmetic
//! (colors, font). Unknown identifiers resolve to the `modern` default so a
//! stale template name in a client can never fail a render — the fallback is
//! logged so template-name drift stays visible.

use tracing::warn;

/// The structural skeleton of a rendered document. The only axis the
/// synthesizer branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// All sections top-to-bottom in one column, header banner first.
    Standard,
    /// Identity, contact and skills in a colored side panel; the rest in a
    /// main panel.
    Sidebar,
}

/// Cosmetic and structural tokens for one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
    pub font_family: &'static str,
    pub layout: LayoutKind,
}

/// Template every unknown identifier falls back to.
pub const DEFAULT_TEMPLATE: &str = "modern";

const TEMPLATES: &[(&str, StyleDescriptor)] = &[
    (
        "modern",
        StyleDescriptor {
            primary_color: "#1A73E8",
            secondary_color: "#f8f9fa",
            accent_color: "#4285F4",
            font_family: "Arial, sans-serif",
            layout: LayoutKind::Standard,
        },
    ),
    (
        "classic",
        StyleDescriptor {
            primary_color: "#2c3e50",
            secondary_color: "#ecf0f1",
            accent_color: "#34495e",
            font_family: "Georgia, serif",
            layout: LayoutKind::Standard,
        },
    ),
    (
        "creative",
        StyleDescriptor {
            primary_color: "#e74c3c",
            secondary_color: "#f39c12",
            accent_color: "#e67e22",
            font_family: "Helvetica, sans-serif",
            layout: LayoutKind::Sidebar,
        },
    ),
    (
        "elegant",
        StyleDescriptor {
            primary_color: "#8e44ad",
            secondary_color: "#e8e8e8",
            accent_color: "#9b59b6",
            font_family: "Calibri, sans-serif",
            layout: LayoutKind::Standard,
        },
    ),
    (
        "executive",
        StyleDescriptor {
            primary_color: "#34495e",
            secondary_color: "#bdc3c7",
            accent_color: "#2c3e50",
            font_family: "Times New Roman, serif",
            layout: LayoutKind::Standard,
        },
    ),
    (
        "minimal",
        StyleDescriptor {
            primary_color: "#333333",
            secondary_color: "#f8f9fa",
            accent_color: "#666666",
            font_family: "Arial, sans-serif",
            layout: LayoutKind::Standard,
        },
    ),
    (
        "technical",
        StyleDescriptor {
            primary_color: "#0066cc",
            secondary_color: "#f0f8ff",
            accent_color: "#0052a3",
            font_family: "Consolas, monospace",
            layout: LayoutKind::Standard,
        },
    ),
    (
        "latex-classic",
        StyleDescriptor {
            primary_color: "#1f4e79",
            secondary_color: "#f5f5f5",
            accent_color: "#2e5984",
            font_family: "Times New Roman, serif",
            layout: LayoutKind::Standard,
        },
    ),
    (
        "latex-modern",
        StyleDescriptor {
            primary_color: "#0066cc",
            secondary_color: "#f8f9fa",
            accent_color: "#004d99",
            font_family: "Arial, sans-serif",
            layout: LayoutKind::Standard,
        },
    ),
    (
        "latex-minimal",
        StyleDescriptor {
            primary_color: "#333333",
            secondary_color: "#ffffff",
            accent_color: "#555555",
            font_family: "Arial, sans-serif",
            layout: LayoutKind::Standard,
        },
    ),
    (
        "latex-sidebar",
        StyleDescriptor {
            primary_color: "#1A73E8",
            secondary_color: "#ffffff",
            accent_color: "#4285F4",
            font_family: "Arial, sans-serif",
            layout: LayoutKind::Sidebar,
        },
    ),
];

/// Resolves a template identifier to its style descriptor.
///
/// Total function: unrecognized identifiers return the `modern` descriptor
/// and emit a warning rather than failing the request.
pub fn resolve_style(template_id: &str) -> &'static StyleDescriptor {
    if let Some((_, style)) = TEMPLATES.iter().find(|(name, _)| *name == template_id) {
        return style;
    }
    warn!(template = %template_id, "unknown template identifier, falling back to '{DEFAULT_TEMPLATE}'");
    default_style()
}

fn default_style() -> &'static StyleDescriptor {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == DEFAULT_TEMPLATE)
        .map(|(_, style)| style)
        .expect("default template must be registered")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_template_resolves() {
        let style = resolve_style("executive");
        assert_eq!(style.primary_color, "#34495e");
        assert_eq!(style.font_family, "Times New Roman, serif");
        assert_eq!(style.layout, LayoutKind::Standard);
    }

    #[test]
    fn test_unknown_template_falls_back_to_modern() {
        let fallback = resolve_style("nonexistent-template");
        assert_eq!(fallback, resolve_style("modern"));
        assert_eq!(fallback.layout, LayoutKind::Standard);
    }

    #[test]
    fn test_exactly_two_templates_use_sidebar_layout() {
        let sidebar: Vec<&str> = TEMPLATES
            .iter()
            .filter(|(_, s)| s.layout == LayoutKind::Sidebar)
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(sidebar, vec!["creative", "latex-sidebar"]);
    }

    #[test]
    fn test_every_registered_template_resolves_to_itself() {
        for (name, style) in TEMPLATES {
            assert_eq!(resolve_style(name), style);
        }
    }
}
