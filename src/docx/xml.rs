//! XML constants and escaping.

use log::debug;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

// Word XML namespaces
pub const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
pub const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
pub const NS_RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

// Relationship types
pub const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const REL_STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
pub const REL_SETTINGS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
pub const REL_HYPERLINK: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

/// Escape `&`, `<`, `>`, `"` and `'` for use in text or attribute values.
///
/// Characters XML 1.0 cannot carry (most C0 controls, lone `U+FFFE`/`U+FFFF`)
/// are dropped. Not idempotent: escaping twice double-escapes.
///
/// ```
/// use markdocx::docx::xml::escape_xml;
///
/// assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(escape_xml("page\u{c}break"), "pagebreak");
/// ```
pub fn escape_xml(text: &str) -> String {
    if text.chars().all(is_xml_char) {
        return quick_xml::escape::escape(text).into_owned();
    }
    let kept: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    debug!(
        "dropped {} characters not allowed in XML",
        text.chars().count() - kept.chars().count()
    );
    quick_xml::escape::escape(&kept).into_owned()
}

/// Whether a character may appear in an XML 1.0 document.
pub fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_five() {
        assert_eq!(
            escape_xml(r#"<tag attr="v">Tom & Jerry's</tag>"#),
            "&lt;tag attr=&quot;v&quot;&gt;Tom &amp; Jerry&apos;s&lt;/tag&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
        assert_eq!(escape_xml(&escape_xml("&")), "&amp;amp;");
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape_xml(""), "");
        assert_eq!(escape_xml("plain text, \u{00e9}\u{4e2d}"), "plain text, \u{00e9}\u{4e2d}");
        assert_eq!(escape_xml("line\nbreak"), "line\nbreak");
    }

    #[test]
    fn test_escape_drops_illegal_characters() {
        assert_eq!(escape_xml("a\u{c}b"), "ab");
        assert_eq!(escape_xml("\u{1b}[31merror\u{1b}[0m & co"), "[31merror[0m &amp; co");
        assert_eq!(escape_xml("keep\ttab\r\n"), "keep\ttab\r\n");
        assert_eq!(escape_xml("\u{0}\u{FFFF}"), "");
    }

    #[test]
    fn test_xml_chars() {
        assert!(is_xml_char('a'));
        assert!(is_xml_char('\n'));
        assert!(is_xml_char('\u{1F600}'));
        assert!(!is_xml_char('\u{0}'));
        assert!(!is_xml_char('\u{B}'));
        assert!(!is_xml_char('\u{FFFE}'));
    }
}
