//! `word/document.xml` to Markdown rendering.
//!
//! The body is streamed once. Paragraph-level state lives on a stack so that
//! paragraphs nested in text boxes do not clobber the enclosing paragraph, and
//! tables keep their own stack so nested tables collapse into the outer cell.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::numbering::{MAX_LIST_LEVEL, Numbering};
use super::relationships::Relationships;

pub fn render_document(
    xml: &str,
    relationships: &Relationships,
    numbering: &Numbering,
) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut walker = BodyWalker::new(relationships, numbering);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => walker.start(&e)?,
            Event::Empty(e) => {
                walker.start(&e)?;
                walker.end(e.name().as_ref());
            }
            Event::End(e) => walker.end(e.name().as_ref()),
            Event::Text(t) => {
                if walker.in_text() {
                    walker.push_text(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(walker.finish())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Format {
    bold: bool,
    italic: bool,
}

impl Format {
    fn marker(self) -> &'static str {
        match (self.bold, self.italic) {
            (true, true) => "***",
            (true, false) => "**",
            (false, true) => "*",
            (false, false) => "",
        }
    }
}

#[derive(Debug)]
struct Segment {
    format: Format,
    text: String,
}

#[derive(Debug, Default)]
struct Run {
    format: Format,
    text: String,
    in_props: bool,
    in_text: bool,
}

#[derive(Debug)]
struct Link {
    target: Option<String>,
    segments: Vec<Segment>,
}

#[derive(Debug, Default)]
struct Paragraph {
    style: Option<String>,
    num_id: Option<String>,
    ilvl: u32,
    segments: Vec<Segment>,
    run: Option<Run>,
    link: Option<Link>,
    /// Number of open tables when the paragraph started.
    table_depth: usize,
}

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    fn append_to_cell(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        let Some(row) = self.rows.last_mut() else { return };
        if row.is_empty() {
            row.push(String::new());
        }
        let Some(cell) = row.last_mut() else { return };
        if !cell.is_empty() {
            cell.push(' ');
        }
        cell.push_str(text);
    }

    fn flatten(&self) -> String {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_markdown(&self) -> Option<String> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return None;
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        for (index, row) in self.rows.iter().enumerate() {
            let cells = (0..columns)
                .map(|col| row.get(col).map(|cell| escape_cell(cell)).unwrap_or_default())
                .collect::<Vec<_>>();
            lines.push(format!("| {} |", cells.join(" | ")));
            if index == 0 {
                lines.push(format!("| {} |", vec!["---"; columns].join(" | ")));
            }
        }
        Some(lines.join("\n"))
    }
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

#[derive(Debug, PartialEq, Eq)]
enum Block {
    Text(String),
    ListItem(String),
}

struct BodyWalker<'a> {
    relationships: &'a Relationships,
    numbering: &'a Numbering,
    paragraphs: Vec<Paragraph>,
    tables: Vec<Table>,
    blocks: Vec<Block>,
}

impl<'a> BodyWalker<'a> {
    fn new(relationships: &'a Relationships, numbering: &'a Numbering) -> Self {
        Self {
            relationships,
            numbering,
            paragraphs: Vec::new(),
            tables: Vec::new(),
            blocks: Vec::new(),
        }
    }

    fn in_text(&self) -> bool {
        self.paragraphs
            .last()
            .and_then(|p| p.run.as_ref())
            .is_some_and(|run| run.in_text)
    }

    fn push_text(&mut self, text: &str) {
        if let Some(run) = self.current_run() {
            run.text.push_str(text);
        }
    }

    fn current_run(&mut self) -> Option<&mut Run> {
        self.paragraphs.last_mut().and_then(|p| p.run.as_mut())
    }

    fn start(&mut self, e: &BytesStart<'_>) -> Result<(), quick_xml::Error> {
        match e.name().as_ref() {
            b"w:tbl" => self.tables.push(Table::default()),
            b"w:tr" => {
                if let Some(table) = self.tables.last_mut() {
                    table.rows.push(Vec::new());
                }
            }
            b"w:tc" => {
                if let Some(row) = self.tables.last_mut().and_then(|t| t.rows.last_mut()) {
                    row.push(String::new());
                }
            }
            b"w:p" => {
                let table_depth = self.tables.len();
                self.paragraphs.push(Paragraph { table_depth, ..Paragraph::default() });
            }
            b"w:pStyle" => {
                let style = attr(e, b"w:val")?;
                if let Some(paragraph) = self.paragraphs.last_mut() {
                    paragraph.style = style;
                }
            }
            b"w:numId" => {
                let num_id = attr(e, b"w:val")?;
                if let Some(paragraph) = self.paragraphs.last_mut() {
                    paragraph.num_id = num_id;
                }
            }
            b"w:ilvl" => {
                let ilvl = attr(e, b"w:val")?
                    .and_then(|v| v.parse::<u32>().ok())
                    .map_or(0, |level| level.min(MAX_LIST_LEVEL));
                if let Some(paragraph) = self.paragraphs.last_mut() {
                    paragraph.ilvl = ilvl;
                }
            }
            b"w:hyperlink" => {
                let target = attr(e, b"r:id")?
                    .and_then(|id| self.relationships.target(&id).map(str::to_string));
                if let Some(paragraph) = self.paragraphs.last_mut() {
                    paragraph.link = Some(Link { target, segments: Vec::new() });
                }
            }
            b"w:r" => {
                if let Some(paragraph) = self.paragraphs.last_mut() {
                    paragraph.run = Some(Run::default());
                }
            }
            b"w:rPr" => {
                if let Some(run) = self.current_run() {
                    run.in_props = true;
                }
            }
            name @ (b"w:b" | b"w:i") => {
                let enabled = !is_val_off(e)?;
                let is_bold = name == b"w:b";
                if let Some(run) = self.current_run().filter(|run| run.in_props) {
                    if is_bold {
                        run.format.bold = enabled;
                    } else {
                        run.format.italic = enabled;
                    }
                }
            }
            b"w:t" => {
                if let Some(run) = self.current_run() {
                    run.in_text = true;
                }
            }
            b"w:tab" => self.push_run_char('\t'),
            b"w:br" | b"w:cr" => self.push_run_char('\n'),
            _ => {}
        }
        Ok(())
    }

    fn push_run_char(&mut self, c: char) {
        if let Some(run) = self.current_run().filter(|run| !run.in_props) {
            run.text.push(c);
        }
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => self.end_table(),
            b"w:p" => self.end_paragraph(),
            b"w:hyperlink" => self.end_hyperlink(),
            b"w:r" => self.end_run(),
            b"w:rPr" => {
                if let Some(run) = self.current_run() {
                    run.in_props = false;
                }
            }
            b"w:t" => {
                if let Some(run) = self.current_run() {
                    run.in_text = false;
                }
            }
            _ => {}
        }
    }

    fn end_run(&mut self) {
        let Some(paragraph) = self.paragraphs.last_mut() else { return };
        let Some(run) = paragraph.run.take() else { return };
        if run.text.is_empty() {
            return;
        }
        let segments = match paragraph.link.as_mut() {
            Some(link) => &mut link.segments,
            None => &mut paragraph.segments,
        };
        push_segment(segments, run.format, &run.text);
    }

    fn end_hyperlink(&mut self) {
        let Some(paragraph) = self.paragraphs.last_mut() else { return };
        let Some(link) = paragraph.link.take() else { return };
        let text = render_segments(&link.segments);
        if text.trim().is_empty() {
            return;
        }
        let rendered = match link.target {
            Some(target) => format!("[{}]({})", text.trim(), target),
            None => text,
        };
        push_segment(&mut paragraph.segments, Format::default(), &rendered);
    }

    fn end_paragraph(&mut self) {
        let Some(paragraph) = self.paragraphs.pop() else { return };
        let text = render_segments(&paragraph.segments);
        let text = text.trim();

        if paragraph.table_depth > 0 {
            if let Some(table) = self.tables.get_mut(paragraph.table_depth - 1) {
                table.append_to_cell(text);
            }
            return;
        }
        if text.is_empty() {
            return;
        }

        if let Some(level) = paragraph.style.as_deref().and_then(heading_level) {
            let heading = text.replace('\n', " ");
            self.blocks.push(Block::Text(format!("{} {}", "#".repeat(level), heading)));
            return;
        }

        match paragraph.num_id.as_deref() {
            Some(num_id) if num_id != "0" => {
                let marker =
                    if self.numbering.is_ordered(num_id, paragraph.ilvl) { "1." } else { "-" };
                let indent = "  ".repeat(paragraph.ilvl as usize);
                self.blocks.push(Block::ListItem(format!("{indent}{marker} {text}")));
            }
            _ => self.blocks.push(Block::Text(text.to_string())),
        }
    }

    fn end_table(&mut self) {
        let Some(table) = self.tables.pop() else { return };
        if let Some(parent) = self.tables.last_mut() {
            parent.append_to_cell(&table.flatten());
            return;
        }
        if let Some(markdown) = table.to_markdown() {
            self.blocks.push(Block::Text(markdown));
        }
    }

    fn finish(self) -> String {
        let mut output = String::new();
        let mut previous: Option<&Block> = None;
        for block in &self.blocks {
            match (previous, block) {
                (None, _) => {}
                (Some(Block::ListItem(_)), Block::ListItem(_)) => output.push('\n'),
                _ => output.push_str("\n\n"),
            }
            match block {
                Block::Text(text) | Block::ListItem(text) => output.push_str(text),
            }
            previous = Some(block);
        }
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }
}

fn push_segment(segments: &mut Vec<Segment>, format: Format, text: &str) {
    if let Some(last) = segments.last_mut()
        && last.format == format
    {
        last.text.push_str(text);
        return;
    }
    segments.push(Segment { format, text: text.to_string() });
}

fn render_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        let marker = segment.format.marker();
        let trimmed = segment.text.trim();
        if marker.is_empty() || trimmed.is_empty() {
            out.push_str(&segment.text);
            continue;
        }
        let leading = &segment.text[..segment.text.len() - segment.text.trim_start().len()];
        let trailing = &segment.text[segment.text.trim_end().len()..];
        out.push_str(leading);
        out.push_str(marker);
        out.push_str(trimmed);
        out.push_str(marker);
        out.push_str(trailing);
    }
    out
}

/// `Title` and `Heading1`..`Heading6` map to Markdown heading levels.
fn heading_level(style: &str) -> Option<usize> {
    if style == "Title" {
        return Some(1);
    }
    let level: usize = style.strip_prefix("Heading")?.parse().ok()?;
    (1..=6).contains(&level).then_some(level)
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

/// Toggle properties like `<w:b w:val="0"/>` switch formatting off.
fn is_val_off(e: &BytesStart<'_>) -> Result<bool, quick_xml::Error> {
    Ok(matches!(attr(e, b"w:val")?.as_deref(), Some("0" | "false" | "off")))
}
