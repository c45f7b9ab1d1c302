//! Doxygen XML input: file selection and documentation filtering.

pub mod presence;
pub mod scanner;

pub use presence::is_documented;
pub use scanner::InputScanner;

/// Parse an XML document, tolerating a DOCTYPE declaration
pub(crate) fn parse_xml(xml: &str) -> Result<roxmltree::Document<'_>, roxmltree::Error> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    roxmltree::Document::parse_with_options(xml, options)
}
