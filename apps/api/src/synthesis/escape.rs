//! HTML escaping for untrusted resume text.

/// Escape HTML special characters.
///
/// Every user-supplied string passes through here before it is embedded in
/// the document, so a name like `<script>` becomes inert text instead of
/// markup.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_significant_characters() {
        assert_eq!(
            escape_html(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escapes_single_quote() {
        assert_eq!(escape_html("O'Brien"), "O&#x27;Brien");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(escape_html("Jane Doe"), "Jane Doe");
    }
}
