//! Object classification and relocation.
//!
//! The cleaned document written by the object template has the shape
//! `<object kind="class|category|protocol"><name>…</name>…</object>`.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::doxygen::parse_xml;
use crate::storage::ensure_dir;
use crate::transform::{TemplateSet, Transformer};
use crate::types::{DocObject, DoxyError, ObjectKind, Result};

/// Raw name and kind as written in a cleaned document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectFields {
    pub name: String,
    pub kind: String,
}

/// Read the first `name` text and the first `object/@kind`
pub fn read_object_fields(path: &Path) -> Result<ObjectFields> {
    let content = fs::read_to_string(path).map_err(|e| DoxyError::read(path, e))?;
    let doc = parse_xml(&content).map_err(|e| DoxyError::xml(path, e))?;

    let name = doc
        .descendants()
        .find(|n| n.has_tag_name("name"))
        .ok_or_else(|| DoxyError::malformed(path, "no <name> element"))?
        .children()
        .find(|n| n.is_text())
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DoxyError::malformed(path, "<name> element has no text"))?
        .to_string();

    let kind = doc
        .descendants()
        .find(|n| n.has_tag_name("object"))
        .ok_or_else(|| DoxyError::malformed(path, "no <object> element"))?
        .attribute("kind")
        .ok_or_else(|| DoxyError::malformed(path, "<object> element has no kind attribute"))?
        .to_string();

    Ok(ObjectFields { name, kind })
}

/// Read a cleaned document into a [`DocObject`]
pub fn read_object(path: &Path) -> Result<DocObject> {
    let fields = read_object_fields(path)?;
    let kind = ObjectKind::parse(&fields.kind).ok_or_else(|| DoxyError::UnknownKind {
        path: path.to_path_buf(),
        kind: fields.kind.clone(),
    })?;
    Ok(DocObject::new(fields.name, kind))
}

/// Clean `<input_dir>/<file_name>` and move it to
/// `<xml_dir>/<Subdir>/<name>.xml`.
///
/// The returned name is the file stem, so category parentheses are gone.
/// The temporary `<xml_dir>/<file_name>` never outlives a failed call,
/// whether the transform or the read-back failed.
pub fn clean_object(
    transformer: &dyn Transformer,
    templates: &TemplateSet,
    file_name: &str,
    input_dir: &Path,
    xml_dir: &Path,
) -> Result<DocObject> {
    ensure_dir(xml_dir)?;

    let input = input_dir.join(file_name);
    let temp = xml_dir.join(file_name);
    if temp.is_file() {
        debug!("Removing stale {}", temp.display());
        fs::remove_file(&temp)?;
    }

    let object = match transformer
        .apply(&templates.object, &input, &temp)
        .and_then(|()| read_object(&temp))
    {
        Ok(object) => object,
        Err(e) => {
            discard(&temp);
            return Err(e);
        }
    };

    let relocated = DocObject::new(object.kind.file_stem(&object.name), object.kind);
    ensure_dir(&xml_dir.join(relocated.kind.subdirectory()))?;

    let destination = xml_dir.join(relocated.relative_path("xml"));
    if destination.is_file() {
        fs::remove_file(&destination)?;
    }
    fs::rename(&temp, &destination)?;

    info!(
        "Cleaned {} {} -> {}",
        relocated.kind,
        object.name,
        destination.display()
    );

    Ok(relocated)
}

fn discard(temp: &Path) {
    if temp.exists()
        && let Err(e) = fs::remove_file(temp)
    {
        debug!("Could not remove {}: {}", temp.display(), e);
    }
}
