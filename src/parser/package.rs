//! DOCX package access: zip container and WordprocessingML body.
//!
//! The reader only collects what the extraction adapter consumes. Of the
//! body, only direct children count: top-level `w:p` paragraphs and
//! top-level `w:tbl` tables. Paragraphs inside table cells contribute to
//! the cell text only.

use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{Error, Result};

use super::options::ErrorMode;
use super::records::{BodyRecords, BodySource, ParagraphRecord, RunRecord, TableRecord};

/// Package-level relationships part.
const PACKAGE_RELS: &str = "_rels/.rels";

/// Conventional location of the main document part.
const DEFAULT_MAIN_PART: &str = "word/document.xml";

/// Suffix shared by the transitional and strict officeDocument relationship types.
const OFFICE_DOCUMENT_REL: &str = "/officeDocument";

/// An opened DOCX package.
pub struct DocxPackage {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    error_mode: ErrorMode,
}

impl DocxPackage {
    /// Open a package from its bytes.
    pub fn from_vec(data: Vec<u8>, error_mode: ErrorMode) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        log::debug!("opened package with {} entries", archive.len());
        Ok(Self {
            archive,
            error_mode,
        })
    }

    /// Read a part by name. Returns `None` if the part does not exist.
    pub fn read_part(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        let mut entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // The declared size is untrusted, so no preallocation from it.
        let mut data = Vec::new();
        entry
            .read_to_end(&mut data)
            .map_err(|e| Error::UnreadablePackage(format!("{}: {}", name, e)))?;
        Ok(Some(data))
    }

    /// Resolve the main document part through the package relationships.
    pub fn main_part_name(&mut self) -> Result<String> {
        let Some(rels) = self.read_part(PACKAGE_RELS)? else {
            log::debug!("no {}, assuming {}", PACKAGE_RELS, DEFAULT_MAIN_PART);
            return Ok(DEFAULT_MAIN_PART.to_string());
        };

        match office_document_target(&rels) {
            Ok(Some(target)) => Ok(target),
            Ok(None) => Ok(DEFAULT_MAIN_PART.to_string()),
            Err(e) if self.error_mode == ErrorMode::Lenient => {
                log::warn!("{}; assuming {}", e, DEFAULT_MAIN_PART);
                Ok(DEFAULT_MAIN_PART.to_string())
            }
            Err(e) => Err(e),
        }
    }
}

impl BodySource for DocxPackage {
    fn read_body(&mut self) -> Result<Option<BodyRecords>> {
        let part = self.main_part_name()?;
        let Some(xml) = self.read_part(&part)? else {
            log::warn!("main document part {} not found", part);
            return Ok(None);
        };
        parse_body(&xml, &part, self.error_mode)
    }
}

/// Find the officeDocument relationship target in a relationships part.
fn office_document_target(xml: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let is_office_document = attr_value(e, b"Type")
                    .map_or(false, |t| t.ends_with(OFFICE_DOCUMENT_REL));
                if is_office_document {
                    if let Some(target) = attr_value(e, b"Target") {
                        return Ok(Some(target.trim_start_matches('/').to_string()));
                    }
                }
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => return Err(Error::malformed_xml(PACKAGE_RELS, e)),
            _ => {}
        }
        buf.clear();
    }
}

/// Parse the body of a main document part into records.
///
/// Returns `Ok(None)` if the part has no `w:body` element.
pub(crate) fn parse_body(xml: &[u8], part: &str, mode: ErrorMode) -> Result<Option<BodyRecords>> {
    let mut collector = BodyCollector::default();

    if let Err(e) = collector.read(xml, part) {
        match mode {
            ErrorMode::Strict => return Err(e),
            ErrorMode::Lenient => log::warn!("{}; keeping content read so far", e),
        }
    }

    if let Some(ref body) = collector.body {
        log::debug!(
            "{}: {} paragraphs, {} tables",
            part,
            body.paragraphs.len(),
            body.tables.len()
        );
    }

    Ok(collector.body)
}

struct OpenParagraph {
    depth: usize,
    record: ParagraphRecord,
}

struct OpenTable {
    depth: usize,
    record: TableRecord,
    row: Option<Vec<String>>,
    cell: Option<String>,
}

/// Event-driven collector over the main document part.
///
/// `stack` holds the local names of the currently open elements; element
/// depth is its index in the stack.
#[derive(Default)]
struct BodyCollector {
    stack: Vec<Vec<u8>>,
    body: Option<BodyRecords>,
    paragraph: Option<OpenParagraph>,
    table: Option<OpenTable>,
}

impl BodyCollector {
    fn read(&mut self, xml: &[u8], part: &str) -> Result<()> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let name = e.local_name().as_ref().to_vec();
                    self.open(&name, e);
                    self.stack.push(name);
                }
                Ok(Event::Empty(ref e)) => {
                    let name = e.local_name().as_ref().to_vec();
                    self.open(&name, e);
                    self.close(&name);
                }
                Ok(Event::End(ref e)) => {
                    self.stack.pop();
                    self.close(e.local_name().as_ref());
                }
                Ok(Event::Text(ref t)) => {
                    if self.parent_is(b"t") {
                        let text = t.unescape().map_err(|e| Error::malformed_xml(part, e))?;
                        self.push_text(&text);
                    }
                }
                Ok(Event::Eof) => return Ok(()),
                Err(e) => {
                    return Err(Error::malformed_xml(
                        part,
                        format!("{} at position {}", e, reader.buffer_position()),
                    ))
                }
                _ => {}
            }
            buf.clear();
        }
    }

    fn parent_is(&self, name: &[u8]) -> bool {
        self.stack.last().map_or(false, |n| n.as_slice() == name)
    }

    /// Handle an element start at depth `self.stack.len()`.
    fn open(&mut self, name: &[u8], e: &BytesStart) {
        let depth = self.stack.len();
        let parent_is_body = self.body.is_some() && self.parent_is(b"body");

        match name {
            b"body" if self.body.is_none() && self.parent_is(b"document") => {
                self.body = Some(BodyRecords::new());
            }
            b"p" if parent_is_body && self.paragraph.is_none() => {
                self.paragraph = Some(OpenParagraph {
                    depth,
                    record: ParagraphRecord::default(),
                });
            }
            b"tbl" if parent_is_body && self.table.is_none() => {
                self.table = Some(OpenTable {
                    depth,
                    record: TableRecord::default(),
                    row: None,
                    cell: None,
                });
            }
            b"tr" => {
                if let Some(table) = self.table.as_mut().filter(|t| depth == t.depth + 1) {
                    table.row = Some(Vec::new());
                }
            }
            b"tc" => {
                if let Some(table) = self.table.as_mut().filter(|t| depth == t.depth + 2) {
                    if table.row.is_some() {
                        table.cell = Some(String::new());
                    }
                }
            }
            b"r" => {
                if let Some(para) = self.paragraph.as_mut().filter(|p| depth == p.depth + 1) {
                    para.record.runs.push(RunRecord::plain());
                }
            }
            b"pStyle" if self.parent_is(b"pPr") => {
                if let Some(para) = self.paragraph.as_mut().filter(|p| depth == p.depth + 2) {
                    if para.record.style_id.is_none() {
                        para.record.style_id = attr_value(e, b"val");
                    }
                }
            }
            b"b" | b"i" if self.parent_is(b"rPr") => {
                let Some(para) = self.paragraph.as_mut() else {
                    return;
                };
                let in_direct_run = depth == para.depth + 3
                    && self
                        .stack
                        .get(para.depth + 1)
                        .map_or(false, |n| n.as_slice() == b"r");
                if !in_direct_run {
                    return;
                }
                let on = attr_value(e, b"val").map_or(true, |v| !is_off(&v));
                if let Some(run) = para.record.runs.last_mut() {
                    if name == b"b" {
                        run.bold = on;
                    } else {
                        run.italic = on;
                    }
                }
            }
            _ => {}
        }
    }

    /// Handle an element end at depth `self.stack.len()`.
    fn close(&mut self, name: &[u8]) {
        let depth = self.stack.len();

        match name {
            b"p" => {
                if self.paragraph.as_ref().map(|p| p.depth) == Some(depth) {
                    if let (Some(para), Some(body)) = (self.paragraph.take(), self.body.as_mut()) {
                        body.paragraphs.push(para.record);
                    }
                }
            }
            b"tc" => {
                if let Some(table) = self.table.as_mut().filter(|t| depth == t.depth + 2) {
                    if let (Some(cell), Some(row)) = (table.cell.take(), table.row.as_mut()) {
                        row.push(cell);
                    }
                }
            }
            b"tr" => {
                if let Some(table) = self.table.as_mut().filter(|t| depth == t.depth + 1) {
                    if let Some(row) = table.row.take() {
                        table.record.rows.push(row);
                    }
                }
            }
            b"tbl" => {
                if self.table.as_ref().map(|t| t.depth) == Some(depth) {
                    if let (Some(table), Some(body)) = (self.table.take(), self.body.as_mut()) {
                        body.tables.push(table.record);
                    }
                }
            }
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(para) = self.paragraph.as_mut() {
            para.record.text.push_str(text);
        } else if let Some(cell) = self.table.as_mut().and_then(|t| t.cell.as_mut()) {
            cell.push_str(text);
        }
    }
}

/// Get an attribute value by local name.
fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// Check for an OOXML boolean that turns a toggle property off.
fn is_off(value: &str) -> bool {
    matches!(value, "0" | "false" | "off")
}
