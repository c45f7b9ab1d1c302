//! In-process stand-ins for the three stylesheets.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::doxygen::parse_xml;
use crate::transform::{FnTransformer, SharedTransformer, TemplateSet};
use crate::types::DoxyError;

/// Doxygen compound file with an optional brief description
pub fn doxygen_compound(kind: &str, name: &str, brief: Option<&str>) -> String {
    let brief = brief
        .map(|b| format!("<para>{}</para>", b))
        .unwrap_or_default();
    format!(
        r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.5.6">
  <compounddef id="x" kind="{kind}" prot="public">
    <compoundname>{name}</compoundname>
    <briefdescription>{brief}</briefdescription>
    <detaileddescription>
    </detaileddescription>
  </compounddef>
</doxygen>
"#
    )
}

/// Cleaned object document as `object.xslt` would write it
pub fn cleaned_object(kind: &str, name: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n<object kind=\"{kind}\">\n\t<name>{name}</name>\n\t<file>{name}.h</file>\n</object>\n"
    )
}

pub fn templates(dir: &Path) -> TemplateSet {
    TemplateSet::in_dir(dir, &crate::config::TransformConfig::default())
}

/// Transformer that dispatches on the template file name
pub fn fake_transformer() -> SharedTransformer {
    Arc::new(FnTransformer::new("fake", |template: &Path, input: &Path, output: &Path| {
        let name = template
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let content = fs::read_to_string(input)?;
        let doc = parse_xml(&content).map_err(|e| DoxyError::xml(input, e))?;

        let rendered = match name {
            "object.xslt" => {
                let def = doc
                    .descendants()
                    .find(|n| n.has_tag_name("compounddef"))
                    .ok_or_else(|| DoxyError::malformed(input, "no compounddef"))?;
                let compound = def
                    .children()
                    .find(|n| n.has_tag_name("compoundname"))
                    .and_then(|n| n.text())
                    .unwrap_or_default();
                cleaned_object(def.attribute("kind").unwrap_or_default(), compound)
            }
            "object2xhtml.xslt" | "index2xhtml.xslt" => {
                let names: Vec<&str> = doc
                    .descendants()
                    .filter(|n| n.has_tag_name("name"))
                    .filter_map(|n| n.text())
                    .collect();
                format!("<html><body>{}</body></html>", names.join(","))
            }
            other => return Err(DoxyError::Config(format!("unexpected template {}", other))),
        };

        fs::write(output, rendered)?;
        Ok(())
    }))
}

/// Transformer that always fails like a crashing engine
pub fn failing_transformer() -> SharedTransformer {
    Arc::new(FnTransformer::new("failing", |template: &Path, input: &Path, _o: &Path| {
        Err(DoxyError::transform(
            PathBuf::from(template),
            PathBuf::from(input),
            None,
            "compilation error: file object.xslt line 1",
        ))
    }))
}
