//! Minimal WordprocessingML packages for end-to-end tests.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

/// Body XML for a document with a `Heading1` title and plain paragraphs.
pub(crate) fn heading_document(title: &str, paragraphs: &[&str]) -> String {
    let mut body = format!(
        r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>{title}</w:t></w:r></w:p>"#
    );
    for paragraph in paragraphs {
        body.push_str(&format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{paragraph}</w:t></w:r></w:p>"#
        ));
    }
    document_xml(&body)
}

/// Wrap body children in a `w:document`.
pub(crate) fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{body}</w:body></w:document>"#
    )
}

/// Write a `.docx` package whose main part is `document_xml`.
pub(crate) fn write_docx(path: &Path, document_xml: &str) {
    write_package(path, &[("word/document.xml", document_xml)]);
}

/// Write a ZIP package with the standard content types and package relationships
/// plus the given parts.
pub(crate) fn write_package(path: &Path, parts: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    let file = File::create(path).expect("Failed to create fixture file");
    let mut writer = ZipWriter::new(file);

    let standard = [("[Content_Types].xml", CONTENT_TYPES), ("_rels/.rels", PACKAGE_RELS)];
    for (name, content) in standard.iter().chain(parts.iter()) {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("Failed to start fixture entry");
        writer.write_all(content.as_bytes()).expect("Failed to write fixture entry");
    }
    writer.finish().expect("Failed to finish fixture package");
}

/// Write a file with a `.docx` name that is not a ZIP package.
pub(crate) fn write_corrupt_docx(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(path, b"plain text pretending to be a document").expect("Failed to write fixture");
}
