//! Index document assembly.
//!
//! Output format (tab-indented):
//!
//! ```xml
//! <?xml version="1.0"?>
//! <project>
//! 	<object kind="class">
//! 		<name>Foo</name>
//! 	</object>
//! </project>
//! ```

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::classify::read_object_fields;
use crate::types::{DocObject, DoxyError, ObjectKind, Result};

/// Collect index entries from the kind subdirectories of `xml_dir`.
///
/// Subdirectories are visited as Classes, Categories, Protocols; files in
/// each are taken in file-name order. The entry kind is the kind of the
/// subdirectory, whatever the file itself declares.
pub fn collect_index(xml_dir: &Path) -> Result<Vec<DocObject>> {
    let mut entries = Vec::new();

    for kind in ObjectKind::ALL {
        let dir = xml_dir.join(kind.subdirectory());
        if !dir.is_dir() {
            debug!("No {} directory at {}", kind, dir.display());
            continue;
        }

        for path in object_files(&dir)? {
            let fields = read_object_fields(&path)?;
            if fields.kind != kind.as_str() {
                warn!(
                    "{} declares kind '{}' but sits in {}; indexing as {}",
                    path.display(),
                    fields.kind,
                    kind.subdirectory(),
                    kind
                );
            }
            entries.push(DocObject::new(fields.name, kind));
        }
    }

    Ok(entries)
}

/// Serialize `entries` to `path`
pub fn write_index(entries: &[DocObject], path: &Path) -> Result<()> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;
    emit(&mut writer, Event::Start(BytesStart::new("project")))?;
    for entry in entries {
        emit(
            &mut writer,
            Event::Start(BytesStart::new("object").with_attributes([("kind", entry.kind.as_str())])),
        )?;
        emit(&mut writer, Event::Start(BytesStart::new("name")))?;
        emit(&mut writer, Event::Text(BytesText::new(&entry.name)))?;
        emit(&mut writer, Event::End(BytesEnd::new("name")))?;
        emit(&mut writer, Event::End(BytesEnd::new("object")))?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("project")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    fs::write(path, bytes)?;

    Ok(())
}

/// Build `<xml_dir>/<index_file>` from the relocated objects
pub fn build_index(xml_dir: &Path, index_file: &str) -> Result<PathBuf> {
    let entries = collect_index(xml_dir)?;
    let path = xml_dir.join(index_file);
    write_index(&entries, &path)?;

    info!("Wrote index of {} objects to {}", entries.len(), path.display());
    Ok(path)
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| DoxyError::XmlWrite(e.into()))
}

fn object_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && path.extension().is_some_and(|e| e == "xml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doxygen::parse_xml;
    use crate::pipeline::testing::cleaned_object;
    use tempfile::TempDir;

    fn place(xml_dir: &Path, kind: ObjectKind, stem: &str, declared: &str, name: &str) {
        let dir = xml_dir.join(kind.subdirectory());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{}.xml", stem)), cleaned_object(declared, name)).unwrap();
    }

    fn parse_index(path: &Path) -> Vec<(String, String)> {
        let content = fs::read_to_string(path).unwrap();
        let doc = parse_xml(&content).unwrap();
        assert_eq!(doc.root_element().tag_name().name(), "project");
        doc.root_element()
            .children()
            .filter(|n| n.has_tag_name("object"))
            .map(|n| {
                let name = n
                    .children()
                    .find(|c| c.has_tag_name("name"))
                    .and_then(|c| c.text())
                    .unwrap()
                    .to_string();
                (n.attribute("kind").unwrap().to_string(), name)
            })
            .collect()
    }

    #[test]
    fn test_counts_and_order() {
        let temp = TempDir::new().unwrap();
        let xml = temp.path();
        place(xml, ObjectKind::Protocol, "NSCoding", "protocol", "NSCoding");
        place(xml, ObjectKind::Class, "Zebra", "class", "Zebra");
        place(xml, ObjectKind::Class, "Apple", "class", "Apple");
        place(xml, ObjectKind::Category, "NSStringExtras", "category", "NSString(Extras)");

        let path = build_index(xml, "index.xml").unwrap();
        let entries = parse_index(&path);

        assert_eq!(
            entries,
            vec![
                ("class".to_string(), "Apple".to_string()),
                ("class".to_string(), "Zebra".to_string()),
                ("category".to_string(), "NSString(Extras)".to_string()),
                ("protocol".to_string(), "NSCoding".to_string()),
            ]
        );
    }

    #[test]
    fn test_kind_comes_from_directory() {
        let temp = TempDir::new().unwrap();
        place(temp.path(), ObjectKind::Protocol, "Odd", "class", "Odd");

        let entries = collect_index(temp.path()).unwrap();
        assert_eq!(entries, vec![DocObject::new("Odd", ObjectKind::Protocol)]);
    }

    #[test]
    fn test_empty_tree() {
        let temp = TempDir::new().unwrap();
        let path = build_index(temp.path(), "index.xml").unwrap();

        assert!(parse_index(&path).is_empty());
    }

    #[test]
    fn test_tab_indented_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.xml");
        write_index(&[DocObject::new("Foo", ObjectKind::Class)], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?xml version=\"1.0\"?>"));
        assert!(content.contains("\n\t<object kind=\"class\">"));
        assert!(content.contains("\n\t\t<name>Foo</name>"));
        assert!(content.ends_with("</project>\n"));
    }

    #[test]
    fn test_names_are_escaped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.xml");
        write_index(&[DocObject::new("A<B>&C", ObjectKind::Class)], &path).unwrap();

        assert_eq!(
            parse_index(&path),
            vec![("class".to_string(), "A<B>&C".to_string())]
        );
    }

    #[test]
    fn test_ignores_non_xml_files() {
        let temp = TempDir::new().unwrap();
        place(temp.path(), ObjectKind::Class, "Foo", "class", "Foo");
        fs::write(temp.path().join("Classes/.DS_Store"), [0u8; 4]).unwrap();

        assert_eq!(collect_index(temp.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_file_fails_with_path() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("Classes");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Broken.xml"), "<object kind=\"class\"/>").unwrap();

        let err = collect_index(temp.path()).unwrap_err();
        assert!(err.to_string().contains("Broken.xml"));
    }
}
