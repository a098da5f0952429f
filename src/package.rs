//! ZIP packaging of OOXML parts, and reading a package back.

use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, Write};
use std::path::Path;

use log::trace;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::docx::xml::{escape_xml, NS_RELATIONSHIPS, XML_DECLARATION};
use crate::error::{Error, Result};

/// A relationship entry from a .rels file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path or URL
    pub target: String,
    /// Whether the target is external
    pub external: bool,
}

impl Relationship {
    /// A relationship to another part of the package.
    pub fn internal(id: impl Into<String>, rel_type: &str, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rel_type: rel_type.to_string(),
            target: target.into(),
            external: false,
        }
    }

    /// A relationship to a resource outside the package.
    pub fn external(id: impl Into<String>, rel_type: &str, target: impl Into<String>) -> Self {
        Self {
            external: true,
            ..Self::internal(id, rel_type, target)
        }
    }
}

/// Ordered collection of relationships from one .rels part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a relationship by ID.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.entries.iter().find(|r| r.id == id)
    }

    /// Get relationships by type, in declaration order.
    pub fn get_by_type(&self, rel_type: &str) -> Vec<&Relationship> {
        self.entries.iter().filter(|r| r.rel_type == rel_type).collect()
    }

    /// Add a relationship.
    pub fn add(&mut self, rel: Relationship) {
        self.entries.push(rel);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a relationships part.
    pub fn to_xml(&self) -> String {
        let mut xml = format!(
            "{}<Relationships xmlns=\"{}\">",
            XML_DECLARATION, NS_RELATIONSHIPS
        );
        for rel in &self.entries {
            xml.push_str(&format!(
                "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"",
                escape_xml(&rel.id),
                escape_xml(&rel.rel_type),
                escape_xml(&rel.target)
            ));
            if rel.external {
                xml.push_str(" TargetMode=\"External\"");
            }
            xml.push_str("/>");
        }
        xml.push_str("</Relationships>");
        xml
    }

    /// Parse a relationships part.
    pub fn from_xml(content: &str) -> Result<Self> {
        let mut rels = Relationships::new();
        if content.trim().is_empty() {
            return Ok(rels);
        }

        let mut reader = quick_xml::Reader::from_str(content);
        reader.config_mut().trim_text(true);

        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Empty(e)) if e.name().as_ref() == b"Relationship" => {
                    let mut id = String::new();
                    let mut rel_type = String::new();
                    let mut target = String::new();
                    let mut external = false;

                    for attr in e.attributes().flatten() {
                        let raw = String::from_utf8_lossy(&attr.value);
                        let value = quick_xml::escape::unescape(&raw)
                            .map(|v| v.into_owned())
                            .unwrap_or_else(|_| raw.to_string());
                        match attr.key.as_ref() {
                            b"Id" => id = value,
                            b"Type" => rel_type = value,
                            b"Target" => target = value,
                            b"TargetMode" => external = value.eq_ignore_ascii_case("external"),
                            _ => {}
                        }
                    }

                    if !id.is_empty() {
                        rels.add(Relationship {
                            id,
                            rel_type,
                            target,
                            external,
                        });
                    }
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
        }

        Ok(rels)
    }
}

/// Writes named parts into a ZIP archive held in memory.
///
/// Every entry is deflated and stamped with the same fixed timestamp, so
/// identical parts always produce identical archive bytes.
pub struct PackageWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PackageWriter {
    pub fn new() -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options,
        }
    }

    /// Add one entry.
    pub fn add_part(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(bytes)?;
        trace!("wrote part {} ({} bytes)", name, bytes.len());
        Ok(())
    }

    /// Finalize the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PackageWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Read access to an existing OOXML package.
pub struct OoxmlPackage {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl OoxmlPackage {
    /// Open a package from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use markdocx::package::OoxmlPackage;
    ///
    /// let package = OoxmlPackage::open("report.docx")?;
    /// println!("{}", package.read_xml("word/document.xml")?);
    /// # Ok::<(), markdocx::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Open a package from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Open a package from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Read a part as raw bytes.
    pub fn read_binary(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingComponent(path.to_string()))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Read a part as UTF-8 text. A leading BOM is skipped.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let bytes = self.read_binary(path)?;
        let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(&bytes);
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::Encoding(format!("{}: {}", path, e)))
    }

    /// Check if a part exists.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == path);
        found
    }

    /// List all part names in archive order.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }

    /// Read the relationships of a part (`""` for the package itself).
    /// A part without a .rels file has no relationships.
    pub fn read_relationships(&self, part_path: &str) -> Result<Relationships> {
        let rels_path = rels_path_for(part_path);
        if !self.exists(&rels_path) {
            return Ok(Relationships::new());
        }
        Relationships::from_xml(&self.read_xml(&rels_path)?)
    }
}

impl std::fmt::Debug for OoxmlPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OoxmlPackage")
            .field("files", &self.list_files().len())
            .finish()
    }
}

/// Location of the .rels part for a part path.
pub fn rels_path_for(part_path: &str) -> String {
    let part_path = part_path.trim_start_matches('/');
    if part_path.is_empty() {
        return "_rels/.rels".to_string();
    }
    match part_path.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part_path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REL_TYPE: &str = "http://test/type1";

    #[test]
    fn test_rels_path_for() {
        assert_eq!(rels_path_for(""), "_rels/.rels");
        assert_eq!(rels_path_for("/"), "_rels/.rels");
        assert_eq!(rels_path_for("word/document.xml"), "word/_rels/document.xml.rels");
        assert_eq!(rels_path_for("/word/settings.xml"), "word/_rels/settings.xml.rels");
    }

    #[test]
    fn test_relationships_collection() {
        let mut rels = Relationships::new();
        rels.add(Relationship::internal("rId1", REL_TYPE, "target1.xml"));
        rels.add(Relationship::external("rId2", REL_TYPE, "https://example.com"));

        assert!(rels.get("rId1").is_some());
        assert!(rels.get("rId3").is_none());
        assert_eq!(rels.get_by_type(REL_TYPE).len(), 2);
        assert!(rels.get("rId2").map(|r| r.external).unwrap_or(false));
        let ids: Vec<&str> = rels.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rId1", "rId2"]);
    }

    #[test]
    fn test_relationships_xml_roundtrip() {
        let mut rels = Relationships::new();
        rels.add(Relationship::internal("rId1", REL_TYPE, "styles.xml"));
        rels.add(Relationship::external("rId2", REL_TYPE, "https://example.com/?a=1&b=2"));

        let xml = rels.to_xml();
        assert!(xml.contains("Target=\"https://example.com/?a=1&amp;b=2\" TargetMode=\"External\""));
        assert_eq!(Relationships::from_xml(&xml).unwrap(), rels);
    }

    #[test]
    fn test_empty_relationships() {
        let xml = Relationships::new().to_xml();
        assert!(xml.starts_with(&format!("{XML_DECLARATION}<Relationships ")));
        assert!(xml.ends_with("<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\"></Relationships>"));
        assert!(Relationships::from_xml(&xml).unwrap().is_empty());
        assert!(Relationships::from_xml("  ").unwrap().is_empty());
    }

    #[test]
    fn test_write_and_read_back() {
        let mut writer = PackageWriter::new();
        writer.add_part("a.xml", b"<a/>").unwrap();
        writer.add_part("dir/b.xml", "<b>\u{00e9}</b>".as_bytes()).unwrap();
        let bytes = writer.finish().unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");

        let package = OoxmlPackage::from_bytes(bytes).unwrap();
        assert_eq!(package.list_files(), vec!["a.xml", "dir/b.xml"]);
        assert!(package.exists("a.xml"));
        assert!(!package.exists("c.xml"));
        assert_eq!(package.read_xml("dir/b.xml").unwrap(), "<b>\u{00e9}</b>");
        assert!(matches!(
            package.read_xml("c.xml"),
            Err(Error::MissingComponent(_))
        ));
        assert!(package.read_relationships("a.xml").unwrap().is_empty());
    }

    #[test]
    fn test_writer_is_deterministic() {
        let build = || {
            let mut writer = PackageWriter::new();
            writer.add_part("x.xml", b"<x>same</x>").unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(
            OoxmlPackage::from_bytes(b"not a zip".to_vec()),
            Err(Error::ZipArchive(_))
        ));
    }
}
