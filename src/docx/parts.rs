//! Package plumbing parts: content types, relationships and settings.

use std::collections::HashMap;
use std::fmt::Write;

use super::xml::{
    NS_CONTENT_TYPES, NS_W, REL_HYPERLINK, REL_OFFICE_DOCUMENT, REL_SETTINGS, REL_STYLES,
    XML_DECLARATION,
};
use crate::package::{Relationship, Relationships};

const CT_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const CT_STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
const CT_SETTINGS: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// `[Content_Types].xml`
pub(crate) fn content_types() -> String {
    let mut xml = String::from(XML_DECLARATION);
    let _ = write!(
        xml,
        concat!(
            r#"<Types xmlns="{ns}">"#,
            r#"<Default Extension="rels" ContentType="{rels}"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/word/document.xml" ContentType="{document}"/>"#,
            r#"<Override PartName="/word/styles.xml" ContentType="{styles}"/>"#,
            r#"<Override PartName="/word/settings.xml" ContentType="{settings}"/>"#,
            "</Types>"
        ),
        ns = NS_CONTENT_TYPES,
        rels = CT_RELATIONSHIPS,
        document = CT_DOCUMENT,
        styles = CT_STYLES,
        settings = CT_SETTINGS,
    );
    xml
}

/// `_rels/.rels`
pub(crate) fn package_relationships() -> String {
    let mut rels = Relationships::new();
    rels.add(Relationship::internal("rId1", REL_OFFICE_DOCUMENT, "word/document.xml"));
    rels.to_xml()
}

/// `word/_rels/document.xml.rels` and the relationship id of each hyperlink
/// target.
///
/// Styles is always `rId1`. Hyperlink targets follow from `rId2` in the
/// order given; settings takes the next free id.
pub(crate) fn document_relationships(hyperlinks: &[String]) -> (String, HashMap<String, String>) {
    let mut rels = Relationships::new();
    rels.add(Relationship::internal("rId1", REL_STYLES, "styles.xml"));

    let mut ids = HashMap::with_capacity(hyperlinks.len());
    let mut next = 2;
    for url in hyperlinks {
        if ids.contains_key(url) {
            continue;
        }
        let id = format!("rId{next}");
        next += 1;
        rels.add(Relationship::external(id.clone(), REL_HYPERLINK, url.clone()));
        ids.insert(url.clone(), id);
    }

    rels.add(Relationship::internal(format!("rId{next}"), REL_SETTINGS, "settings.xml"));
    (rels.to_xml(), ids)
}

/// `word/settings.xml`
pub(crate) fn settings() -> String {
    let mut xml = String::from(XML_DECLARATION);
    let _ = write!(
        xml,
        concat!(
            r#"<w:settings xmlns:w="{ns}">"#,
            r#"<w:zoom w:percent="100"/>"#,
            r#"<w:defaultTabStop w:val="720"/>"#,
            r#"<w:characterSpacingControl w:val="doNotCompress"/>"#,
            r#"<w:compat><w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/></w:compat>"#,
            r#"<w:rsids><w:rsidRoot w:val="00000000"/></w:rsids>"#,
            r#"<w:themeFontLang w:val="en-US"/>"#,
            r#"<w:clrSchemeMapping w:bg1="light1" w:t1="dark1" w:bg2="light2" w:t2="dark2" "#,
            r#"w:accent1="accent1" w:accent2="accent2" w:accent3="accent3" w:accent4="accent4" "#,
            r#"w:accent5="accent5" w:accent6="accent6" w:hyperlink="hyperlink" "#,
            r#"w:followedHyperlink="followedHyperlink"/>"#,
            "</w:settings>"
        ),
        ns = NS_W
    );
    xml
}

/// `word/_rels/settings.xml.rels`, an empty relationship set.
pub(crate) fn settings_relationships() -> String {
    Relationships::new().to_xml()
}
