//! `word/_rels/document.xml.rels` reader.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::Event;

/// Relationship targets keyed by relationship id (`rId7` -> `https://...`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    targets: HashMap<String, String>,
}

impl Relationships {
    pub fn target(&self, id: &str) -> Option<&str> {
        self.targets.get(id).map(String::as_str)
    }
}

pub fn parse_relationships(xml: &str) -> Result<Relationships, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut targets = HashMap::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"Relationship" => {
                let mut id = None;
                let mut target = None;
                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.as_ref() {
                        b"Id" => id = Some(attr.unescape_value()?.into_owned()),
                        b"Target" => target = Some(attr.unescape_value()?.into_owned()),
                        _ => {}
                    }
                }
                if let (Some(id), Some(target)) = (id, target) {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(Relationships { targets })
}
