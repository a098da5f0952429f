//! End-to-end conversion tests.
//!
//! Every test converts Markdown to a package and reads it back through
//! `OoxmlPackage`.

mod common;

use common::{assert_well_formed, document_xml, package_for, texts, REQUIRED_PARTS};
use markdocx::style::StylingConfig;
use markdocx::{convert, convert_file, Converter, DocxElement, Error};

const SAMPLE: &str = r#"# Project Title

This is **bold** and *italic* text with `code` and ~~strike~~.

## Lists

- first
- second with [a link](https://example.com)

1. one
2. two

> Quoted *words* here.

```rust
fn main() {
    println!("hi");
}
```

| Name | Value |
|------|-------|
| a    | 1     |

---

![diagram](images/diagram.png)
"#;

// =============================================================================
// Package structure
// =============================================================================

#[test]
fn test_required_parts_present() {
    let package = package_for(SAMPLE, &StylingConfig::default());
    assert_eq!(package.list_files(), REQUIRED_PARTS.to_vec());
}

#[test]
fn test_all_parts_well_formed() {
    let package = package_for(SAMPLE, &StylingConfig::default());
    for name in REQUIRED_PARTS {
        let xml = package.read_xml(name).unwrap();
        assert_well_formed(name, &xml);
        assert!(xml.starts_with("<?xml "), "{name}");
        assert!(!xml.contains("?>\n"), "{name}: newline after declaration");
    }
}

#[test]
fn test_empty_input_is_valid_package() {
    let bytes = convert("").unwrap();
    assert_eq!(&bytes[..4], &[0x50, 0x4B, 0x03, 0x04]);

    let package = package_for("", &StylingConfig::default());
    let xml = package.read_xml("word/document.xml").unwrap();
    assert_well_formed("word/document.xml", &xml);
    assert!(xml.contains("<w:body><w:sectPr>"));
    assert!(!xml.contains("<w:p>"));
}

#[test]
fn test_relationships_resolve() {
    let package = package_for(SAMPLE, &StylingConfig::default());
    let root = package.read_relationships("").unwrap();
    let main = root.get("rId1").unwrap();
    assert_eq!(main.target, "word/document.xml");

    let doc = package.read_relationships("word/document.xml").unwrap();
    for rel in doc.iter().filter(|r| !r.external) {
        assert!(package.exists(&format!("word/{}", rel.target)), "{} missing", rel.target);
    }
    assert!(package.read_relationships("word/settings.xml").unwrap().is_empty());
}

#[test]
fn test_output_is_deterministic() {
    let first = convert(SAMPLE).unwrap();
    let second = convert(SAMPLE).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Element mapping
// =============================================================================

#[test]
fn test_heading_paragraph() {
    let xml = document_xml("# Title", &StylingConfig::default());
    assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
    assert_eq!(texts(&xml), vec!["Title"]);
}

#[test]
fn test_bold_and_italic_runs() {
    let xml = document_xml("This is **bold** and *italic* text.", &StylingConfig::default());
    assert!(xml.contains(r#"<w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">bold</w:t></w:r>"#));
    assert!(xml.contains(r#"<w:r><w:rPr><w:i/></w:rPr><w:t xml:space="preserve">italic</w:t></w:r>"#));
    assert_eq!(texts(&xml).concat(), "This is bold and italic text.");
}

#[test]
fn test_nested_emphasis_keeps_all_text() {
    let xml = document_xml("**bold *and* more**", &StylingConfig::default());
    assert_eq!(texts(&xml).concat(), "bold and more");
    assert!(xml.contains(r#"<w:rPr><w:b/><w:i/></w:rPr><w:t xml:space="preserve">and</w:t>"#));
    assert!(xml.contains(r#"<w:rPr><w:b/></w:rPr><w:t xml:space="preserve"> more</w:t>"#));
}

#[test]
fn test_table_structure() {
    let xml = document_xml("| A | B |\n|---|---|\n| 1 | 2 |\n", &StylingConfig::default());
    assert_eq!(xml.matches("<w:tbl>").count(), 1);
    assert_eq!(xml.matches("<w:tr>").count(), 2);
    assert_eq!(xml.matches("<w:tc>").count(), 4);
    assert_eq!(xml.matches("<w:gridCol ").count(), 2);
    assert_eq!(texts(&xml), vec!["A", "B", "1", "2"]);
}

#[test]
fn test_special_characters_escaped_once() {
    let xml = document_xml(r#"Tom & Jerry <3 "quotes" 'single'"#, &StylingConfig::default());
    assert!(xml.contains("Tom &amp; Jerry &lt;3 &quot;quotes&quot; &apos;single&apos;"));
    assert!(!xml.contains("&amp;amp;"));
    assert_eq!(texts(&xml).concat(), r#"Tom & Jerry <3 "quotes" 'single'"#);
}

#[test]
fn test_code_block_single_run() {
    let xml = document_xml("```\na < b\n  c\n```\n", &StylingConfig::default());
    assert!(xml.contains(r#"<w:pStyle w:val="CodeBlock"/>"#));
    assert_eq!(texts(&xml), vec!["a < b\n  c\n"]);
}

#[test]
fn test_lists_and_rule() {
    let xml = document_xml("- a\n- b\n\n1. c\n\n---\n", &StylingConfig::default());
    assert_eq!(xml.matches(r#"<w:numId w:val="1"/>"#).count(), 2);
    assert_eq!(xml.matches(r#"<w:numId w:val="2"/>"#).count(), 1);
    assert!(xml.contains(r#"<w:bottom w:val="single" w:sz="6""#));
}

#[test]
fn test_image_placeholder() {
    let xml = document_xml("![A chart](chart.png)", &StylingConfig::default());
    assert!(xml.contains(r#"descr="A chart""#));
    assert!(xml.contains("<w:drawing>"));
    assert!(!xml.contains("chart.png"));

    let package = package_for("![A chart](chart.png)", &StylingConfig::default());
    let xml = package.read_xml("word/document.xml").unwrap();
    assert!(xml.contains(r#"<a:blip r:embed="rId1"/>"#));
    let rels = package.read_relationships("word/document.xml").unwrap();
    assert_eq!(rels.get("rId1").unwrap().target, "styles.xml");
    assert!(!package.list_files().iter().any(|name| name.starts_with("word/media/")));
}

#[test]
fn test_html_is_dropped() {
    let xml = document_xml("<div>raw</div>\n\nkept\n", &StylingConfig::default());
    assert_eq!(texts(&xml), vec!["kept"]);
}

// =============================================================================
// API surface
// =============================================================================

#[test]
fn test_parse_matches_model() {
    let converter = Converter::default();
    let elements = converter.parse(SAMPLE);
    let kinds: Vec<&str> = elements.iter().map(DocxElement::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "heading",
            "bullet_list",
            "numbered_list",
            "blockquote",
            "code_block",
            "table",
            "horizontal_rule",
            "image",
        ]
    );
}

#[test]
fn test_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.md");
    std::fs::write(&path, SAMPLE).unwrap();
    assert_eq!(convert_file(&path).unwrap(), convert(SAMPLE).unwrap());

    let missing = convert_file(dir.path().join("missing.md"));
    assert!(matches!(missing, Err(Error::Io(_))));
}

#[test]
fn test_control_characters_are_dropped() {
    let xml = document_xml("a\x0cb", &StylingConfig::default());
    assert_well_formed("word/document.xml", &xml);
    assert_eq!(texts(&xml).concat(), "ab");

    let log = "Build log:\n\n```\n\x1b[31merror\x1b[0m: failed\n```\n";
    let package = package_for(log, &StylingConfig::default());
    let xml = package.read_xml("word/document.xml").unwrap();
    assert_well_formed("word/document.xml", &xml);
    assert_eq!(texts(&xml), vec!["Build log:", "[31merror[0m: failed\n"]);
}

#[test]
fn test_converter_is_shareable_across_threads() {
    let converter = std::sync::Arc::new(Converter::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let converter = converter.clone();
            std::thread::spawn(move || converter.convert(&format!("# Doc {i}")).unwrap())
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let bytes = handle.join().unwrap();
        assert_eq!(bytes, convert(&format!("# Doc {i}")).unwrap());
    }
}
