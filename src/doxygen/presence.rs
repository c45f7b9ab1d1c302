//! Documentation presence check.
//!
//! Doxygen writes `briefdescription` and `detaileddescription` sections for
//! every compound and member, documented or not. A file counts as documented
//! when any of those sections holds a `para` with visible text.

use roxmltree::Node;
use std::fs;
use std::path::Path;

use super::parse_xml;
use crate::types::{DoxyError, Result};

const DESCRIPTION_TAGS: &[&str] = &["briefdescription", "detaileddescription"];

/// Check whether the Doxygen file at `path` carries any written description
pub fn is_documented(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path).map_err(|e| DoxyError::read(path, e))?;
    has_description(&content).map_err(|e| DoxyError::xml(path, e))
}

/// Same check on an in-memory document
pub fn has_description(xml: &str) -> std::result::Result<bool, roxmltree::Error> {
    let doc = parse_xml(xml)?;

    Ok(doc
        .descendants()
        .filter(|n| n.is_element() && DESCRIPTION_TAGS.contains(&n.tag_name().name()))
        .any(|section| {
            section
                .descendants()
                .filter(|n| n.has_tag_name("para"))
                .any(|para| has_text(&para))
        }))
}

fn has_text(node: &Node<'_, '_>) -> bool {
    node.descendants()
        .filter(|n| n.is_text())
        .any(|n| n.text().is_some_and(|t| !t.trim().is_empty()))
}
