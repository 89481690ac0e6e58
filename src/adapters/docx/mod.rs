//! DOCX adapter for the `DocumentConverter` port.
//!
//! A `.docx` file is a ZIP package of WordprocessingML parts:
//! - `word/document.xml`: body content (required)
//! - `word/_rels/document.xml.rels`: relationship targets (hyperlinks)
//! - `word/numbering.xml`: list numbering definitions

mod body;
mod numbering;
mod relationships;

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::domain::{AppError, ConvertedDocument};
use crate::ports::DocumentConverter;

use numbering::{Numbering, parse_numbering};
use relationships::{Relationships, parse_relationships};

const DOCUMENT_PART: &str = "word/document.xml";
const RELATIONSHIPS_PART: &str = "word/_rels/document.xml.rels";
const NUMBERING_PART: &str = "word/numbering.xml";

/// Converts WordprocessingML packages to Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxConverter;

impl DocxConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert a package from any seekable reader.
    ///
    /// `source` is only used to label errors.
    pub fn convert_reader<R: Read + Seek>(
        &self,
        reader: R,
        source: &Path,
    ) -> Result<ConvertedDocument, AppError> {
        let mut archive = ZipArchive::new(reader).map_err(|e| {
            AppError::conversion(source, format!("Not a valid .docx package: {e}"))
        })?;

        let document_xml = read_part(&mut archive, DOCUMENT_PART, source)?
            .ok_or_else(|| AppError::conversion(source, format!("Missing {DOCUMENT_PART}")))?;

        let relationships = match read_part(&mut archive, RELATIONSHIPS_PART, source)? {
            Some(xml) => parse_relationships(&xml)
                .map_err(|e| malformed_part(source, RELATIONSHIPS_PART, e))?,
            None => Relationships::default(),
        };

        let numbering = match read_part(&mut archive, NUMBERING_PART, source)? {
            Some(xml) => {
                parse_numbering(&xml).map_err(|e| malformed_part(source, NUMBERING_PART, e))?
            }
            None => Numbering::default(),
        };

        let markdown = body::render_document(&document_xml, &relationships, &numbering)
            .map_err(|e| malformed_part(source, DOCUMENT_PART, e))?;

        Ok(ConvertedDocument::new(markdown))
    }
}

impl DocumentConverter for DocxConverter {
    fn convert(&self, source: &Path) -> Result<ConvertedDocument, AppError> {
        let file = File::open(source).map_err(|e| {
            AppError::conversion(source, format!("Failed to open {}: {e}", source.display()))
        })?;
        self.convert_reader(file, source)
    }
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
    source: &Path,
) -> Result<Option<String>, AppError> {
    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(AppError::conversion(source, format!("Failed to read {name}: {e}"))),
    };

    let mut content = String::new();
    part.read_to_string(&mut content)
        .map_err(|e| AppError::conversion(source, format!("Failed to read {name}: {e}")))?;
    Ok(Some(content))
}

fn malformed_part(source: &Path, part: &str, err: quick_xml::Error) -> AppError {
    AppError::conversion(source, format!("Malformed {part}: {err}"))
}
