//! Link extraction over the document model.

use crate::model::{DocxElement, TextRun};

/// Every non-empty link destination in document order, duplicates included.
///
/// Table cells are searched recursively. Headings carry no runs and image
/// sources are not links.
pub fn extract_links(elements: &[DocxElement]) -> Vec<String> {
    let mut links = Vec::new();
    collect(elements, &mut links);
    links
}

/// Distinct link destinations in first-occurrence order.
pub fn unique_links(elements: &[DocxElement]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for link in extract_links(elements) {
        if !unique.contains(&link) {
            unique.push(link);
        }
    }
    unique
}

fn collect(elements: &[DocxElement], links: &mut Vec<String>) {
    for element in elements {
        match element {
            DocxElement::Paragraph { runs } | DocxElement::Blockquote { runs } => {
                push_runs(runs, links)
            }
            DocxElement::BulletList { items } | DocxElement::NumberedList { items } => {
                for item in items {
                    push_runs(item, links);
                }
            }
            DocxElement::Table { rows } => {
                for cell in rows.iter().flat_map(|row| &row.cells) {
                    collect(&cell.content, links);
                }
            }
            DocxElement::Heading { .. }
            | DocxElement::CodeBlock { .. }
            | DocxElement::HorizontalRule
            | DocxElement::Image { .. } => {}
        }
    }
}

fn push_runs(runs: &[TextRun], links: &mut Vec<String>) {
    links.extend(runs.iter().filter_map(TextRun::link_url).map(str::to_string));
}
