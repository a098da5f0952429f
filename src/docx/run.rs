//! Text run rendering under the active link policy.

use std::collections::HashMap;

use super::props::RunProperties;
use super::xml::escape_xml;
use crate::model::TextRun;
use crate::style::{LinkStyle, StylingConfig};

/// Renders [`TextRun`]s to `w:r` elements.
pub(crate) struct RunWriter<'a> {
    link_color: &'a str,
    link_style: LinkStyle,
    /// Relationship id per hyperlink target; only consulted for
    /// [`LinkStyle::Hyperlink`].
    hyperlinks: &'a HashMap<String, String>,
}

impl<'a> RunWriter<'a> {
    pub fn new(config: &'a StylingConfig, hyperlinks: &'a HashMap<String, String>) -> Self {
        Self {
            link_color: &config.link_color,
            link_style: config.link_style,
            hyperlinks,
        }
    }

    pub fn write_runs(&self, runs: &[TextRun]) -> String {
        runs.iter().map(|run| self.write_run(run)).collect()
    }

    pub fn write_run(&self, run: &TextRun) -> String {
        let link = run.link_url();

        let mut props = RunProperties::new();
        if run.style.code {
            props.style = Some("Code".to_string());
        }
        props.bold = run.style.bold;
        props.italic = run.style.italic;
        props.strike = run.style.strikethrough;
        props.underline = run.style.underline;
        if link.is_some() {
            props.color = Some(self.link_color.to_string());
            if self.link_style != LinkStyle::Colored {
                props.underline = true;
            }
        }

        let text = match (link, self.link_style) {
            (Some(url), LinkStyle::InlineUrl) => format!("{} ({})", run.text, url),
            _ => run.text.clone(),
        };
        let xml = text_run(&props, &text);

        match (link, self.link_style) {
            (Some(url), LinkStyle::Hyperlink) => match self.hyperlinks.get(url) {
                Some(id) => format!(r#"<w:hyperlink r:id="{id}" w:history="1">{xml}</w:hyperlink>"#),
                None => xml,
            },
            _ => xml,
        }
    }
}

/// `<w:r>` with the given properties and escaped text.
pub(crate) fn text_run(props: &RunProperties, text: &str) -> String {
    format!(
        r#"<w:r>{}<w:t xml:space="preserve">{}</w:t></w:r>"#,
        props.to_xml(),
        escape_xml(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextStyle;

    fn render(config: &StylingConfig, run: &TextRun) -> String {
        let mut ids = HashMap::new();
        ids.insert("https://example.com".to_string(), "rId2".to_string());
        RunWriter::new(config, &ids).write_run(run)
    }

    #[test]
    fn test_plain_run() {
        let xml = render(&StylingConfig::default(), &TextRun::plain("hi "));
        assert_eq!(xml, r#"<w:r><w:t xml:space="preserve">hi </w:t></w:r>"#);
    }

    #[test]
    fn test_flags_and_code_style() {
        let style = TextStyle {
            bold: true,
            italic: true,
            code: true,
            ..TextStyle::default()
        };
        let xml = render(&StylingConfig::default(), &TextRun::styled("x", style));
        assert!(xml.starts_with(r#"<w:r><w:rPr><w:rStyle w:val="Code"/><w:b/><w:i/></w:rPr>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = render(&StylingConfig::default(), &TextRun::plain("a<b & 'c'"));
        assert!(xml.contains(">a&lt;b &amp; &apos;c&apos;</w:t>"));
    }

    #[test]
    fn test_colored_link() {
        let config = StylingConfig::default();
        let xml = render(&config, &TextRun::link("site", "https://example.com"));
        assert!(xml.contains(r#"<w:color w:val="0066cc"/>"#));
        assert!(!xml.contains("<w:u "));
        assert!(xml.contains(">site</w:t>"));
        assert!(!xml.contains("w:hyperlink"));
    }

    #[test]
    fn test_inline_url_link() {
        let config = StylingConfig::default().with_link_style(LinkStyle::InlineUrl);
        let xml = render(&config, &TextRun::link("site", "https://example.com"));
        assert!(xml.contains(r#"<w:u w:val="single"/>"#));
        assert!(xml.contains(">site (https://example.com)</w:t>"));
    }

    #[test]
    fn test_hyperlink() {
        let config = StylingConfig::default()
            .with_link_style(LinkStyle::Hyperlink)
            .with_link_color("FF0000");
        let xml = render(&config, &TextRun::link("site", "https://example.com"));
        assert!(xml.starts_with(r#"<w:hyperlink r:id="rId2" w:history="1"><w:r>"#));
        assert!(xml.contains(r#"<w:color w:val="FF0000"/>"#));
        assert!(xml.contains(">site</w:t>"));
        assert!(xml.ends_with("</w:r></w:hyperlink>"));
    }

    #[test]
    fn test_empty_link_is_not_a_link() {
        let config = StylingConfig::default().with_link_style(LinkStyle::InlineUrl);
        let xml = render(&config, &TextRun::plain("x").with_link(""));
        assert_eq!(xml, r#"<w:r><w:t xml:space="preserve">x</w:t></w:r>"#);
    }
}
