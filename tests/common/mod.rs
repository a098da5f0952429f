//! Shared helpers for integration tests.

#![allow(dead_code)]

use markdocx::style::StylingConfig;
use markdocx::OoxmlPackage;
use quick_xml::events::Event;
use quick_xml::Reader;

/// All parts every generated package must contain.
pub const REQUIRED_PARTS: [&str; 7] = [
    "[Content_Types].xml",
    "_rels/.rels",
    "word/_rels/document.xml.rels",
    "word/document.xml",
    "word/styles.xml",
    "word/settings.xml",
    "word/_rels/settings.xml.rels",
];

/// Convert and open the result for reading.
pub fn package_for(markdown: &str, config: &StylingConfig) -> OoxmlPackage {
    let bytes = markdocx::convert_with_config(markdown, config).expect("conversion should succeed");
    OoxmlPackage::from_bytes(bytes).expect("output should be a valid zip")
}

/// `word/document.xml` of a converted document.
pub fn document_xml(markdown: &str, config: &StylingConfig) -> String {
    package_for(markdown, config)
        .read_xml("word/document.xml")
        .expect("document part should exist")
}

/// Panic unless `xml` parses start to end with balanced tags.
pub fn assert_well_formed(name: &str, xml: &str) {
    assert!(
        xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#),
        "{name} lacks the XML declaration"
    );
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Empty(_)) if depth == 0 => roots += 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("{name} is not well-formed: {e}"),
        }
    }
    assert_eq!(depth, 0, "{name} has unclosed elements");
    assert_eq!(roots, 1, "{name} must have exactly one root element");
}

/// Text of every `w:t` element, in document order.
pub fn texts(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut inside = false;
    let mut out = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => {
                inside = true;
                out.push(String::new());
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => inside = false,
            Ok(Event::Text(t)) if inside => {
                if let Some(last) = out.last_mut() {
                    last.push_str(&t.unescape().expect("valid text"));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("unreadable xml: {e}"),
        }
    }
    out
}
