//! `word/numbering.xml` reader.
//!
//! Only the distinction between bulleted and numbered levels is kept:
//!
//! ```xml
//! <w:abstractNum w:abstractNumId="0">
//!   <w:lvl w:ilvl="0"><w:numFmt w:val="decimal"/></w:lvl>
//! </w:abstractNum>
//! <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
//! ```

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Deepest list level WordprocessingML defines (`w:ilvl` runs 0..=8).
pub const MAX_LIST_LEVEL: u32 = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Numbering {
    ordered_levels: HashMap<String, HashMap<u32, bool>>,
    abstract_ids: HashMap<String, String>,
}

impl Numbering {
    /// Whether list `num_id` renders level `ilvl` with numbers.
    ///
    /// Unknown lists and levels are treated as bulleted.
    pub fn is_ordered(&self, num_id: &str, ilvl: u32) -> bool {
        self.abstract_ids
            .get(num_id)
            .and_then(|abstract_id| self.ordered_levels.get(abstract_id))
            .and_then(|levels| levels.get(&ilvl))
            .copied()
            .unwrap_or(false)
    }
}

pub fn parse_numbering(xml: &str) -> Result<Numbering, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut numbering = Numbering::default();
    let mut current_abstract: Option<String> = None;
    let mut current_level: Option<u32> = None;
    let mut current_num: Option<String> = None;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => match e.name().as_ref() {
                b"w:abstractNum" => current_abstract = attr(&e, b"w:abstractNumId")?,
                b"w:lvl" => {
                    current_level = attr(&e, b"w:ilvl")?
                        .and_then(|v| v.parse().ok())
                        .filter(|level| *level <= MAX_LIST_LEVEL);
                }
                b"w:numFmt" => {
                    if let (Some(abstract_id), Some(level), Some(format)) =
                        (&current_abstract, current_level, attr(&e, b"w:val")?)
                    {
                        let ordered = format != "bullet" && format != "none";
                        numbering
                            .ordered_levels
                            .entry(abstract_id.clone())
                            .or_default()
                            .insert(level, ordered);
                    }
                }
                b"w:num" => current_num = attr(&e, b"w:numId")?,
                b"w:abstractNumId" => {
                    if let (Some(num_id), Some(abstract_id)) =
                        (&current_num, attr(&e, b"w:val")?)
                    {
                        numbering.abstract_ids.insert(num_id.clone(), abstract_id);
                    }
                }
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:abstractNum" => current_abstract = None,
                b"w:lvl" => current_level = None,
                b"w:num" => current_num = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(numbering)
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, quick_xml::Error> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
