use std::{fmt, fs, mem, ops::Range, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::{
    data::{
        Catalog, Context, DEFAULT_TS_VERSION, Location, Message, Translation, TranslationForms,
        TranslationType,
    },
    error::{TsError, TsResult},
};

/// Read and parse a `.ts` catalog from disk.
pub fn parse_ts_file(path: &Path) -> TsResult<Catalog> {
    let file_path = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path).map_err(|source| TsError::Io {
        path: file_path.clone(),
        source,
    })?;
    parse_ts_str(&content, &file_path)
}

/// Parse the content of a `.ts` catalog.
///
/// Text is kept verbatim (line breaks in `<source>` are significant) and
/// entities are decoded. Elements the model does not cover (`<byte>`,
/// `<oldsource>`, `<dependencies>`, ...) are skipped.
pub fn parse_ts_str(content: &str, file_path: &str) -> TsResult<Catalog> {
    parse_ts_with_spans(content, file_path).map(|(catalog, _)| catalog)
}

/// Byte ranges of one `<context>` element and of its `<message>` children.
///
/// Message ranges are in the same order as `Context::messages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSpan {
    pub span: Range<usize>,
    pub messages: Vec<Range<usize>>,
}

/// Parse a catalog and record where each context and message sits in
/// `content`, one `ContextSpan` per `Catalog::contexts` entry.
///
/// Ranges cover the element from `<` of its start tag to `>` of its end
/// tag and index into `content` as given (a leading BOM included).
pub fn parse_ts_with_spans(
    content: &str,
    file_path: &str,
) -> TsResult<(Catalog, Vec<ContextSpan>)> {
    let body = content.strip_prefix('\u{feff}').unwrap_or(content);
    let base = content.len() - body.len();
    // Pre-compute line index for O(log n) line lookups
    let line_index = build_line_index(body);
    let mut reader = Reader::from_str(body);
    let mut state = ParseState::new(file_path);

    loop {
        let start = reader.buffer_position() as usize;
        let line = offset_to_line(&line_index, start);
        let event = reader.read_event().map_err(|e| {
            xml_error(
                offset_to_line(&line_index, reader.error_position() as usize),
                e,
            )
        })?;
        let end = reader.buffer_position() as usize;
        let span = base + start..base + end;

        match event {
            Event::Start(e) => state.open(&e, line, span.start)?,
            Event::Empty(e) => {
                state.open(&e, line, span.start)?;
                state.close(line, span.end)?;
            }
            Event::End(_) => state.close(line, span.end)?,
            Event::Text(e) => {
                let text = e.unescape().map_err(|err| xml_error(line, err))?;
                state.text(&text);
            }
            Event::CData(e) => state.text(&String::from_utf8_lossy(&e)),
            Event::Eof => break,
            // Declaration, doctype, comments and processing instructions
            _ => {}
        }
    }

    state.finish(offset_to_line(&line_index, body.len()))
}

/// Whether `content` can be an XML document at all.
///
/// `.ts` is shared with TypeScript sources; those never start with `<`.
pub fn looks_like_xml(content: &str) -> bool {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .trim_start()
        .starts_with('<')
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, b) in content.bytes().enumerate() {
        if b == b'\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn xml_error(line: usize, err: impl fmt::Display) -> TsError {
    TsError::Xml {
        line,
        message: err.to_string(),
    }
}

fn structure_error(line: usize, message: impl Into<String>) -> TsError {
    TsError::Structure {
        line,
        message: message.into(),
    }
}

fn attribute(e: &BytesStart, name: &str, line: usize) -> TsResult<Option<String>> {
    match e.try_get_attribute(name) {
        Ok(Some(attr)) => attr
            .unescape_value()
            .map(|value| Some(value.into_owned()))
            .map_err(|err| xml_error(line, err)),
        Ok(None) => Ok(None),
        Err(err) => Err(xml_error(line, err)),
    }
}

/// Elements whose character data belongs to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ContextName,
    Source,
    Comment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
}

impl Field {
    fn element(&self) -> &'static str {
        match self {
            Field::ContextName => "name",
            Field::Source => "source",
            Field::Comment => "comment",
            Field::ExtraComment => "extracomment",
            Field::TranslatorComment => "translatorcomment",
            Field::Translation => "translation",
            Field::NumerusForm => "numerusform",
        }
    }
}

/// A `<message>` whose end tag has not been seen yet.
#[derive(Default)]
struct PendingMessage {
    line: usize,
    start: usize,
    numerus: bool,
    source: Option<String>,
    comment: Option<String>,
    extra_comment: Option<String>,
    translator_comment: Option<String>,
    locations: Vec<Location>,
    kind: TranslationType,
    single: Option<String>,
    forms: Option<Vec<String>>,
}

impl PendingMessage {
    fn into_message(self) -> TsResult<Message> {
        let source = self
            .source
            .ok_or_else(|| structure_error(self.line, "<message> has no <source>"))?;
        let forms = match self.forms {
            Some(forms) => TranslationForms::Numerus(forms),
            // `numerus="yes"` with an empty <translation>
            None if self.numerus && self.single.as_deref().is_none_or(is_blank) => {
                TranslationForms::Numerus(Vec::new())
            }
            None => TranslationForms::Single(self.single.unwrap_or_default()),
        };
        Ok(Message {
            source,
            comment: self.comment,
            extra_comment: self.extra_comment,
            translator_comment: self.translator_comment,
            locations: self.locations,
            numerus: self.numerus,
            translation: Translation {
                kind: self.kind,
                forms,
            },
            line: self.line,
        })
    }
}

struct ParseState<'a> {
    file_path: &'a str,
    /// Names of the currently open elements.
    stack: Vec<String>,
    catalog: Option<Catalog>,
    context: Option<Context>,
    context_span: Option<ContextSpan>,
    spans: Vec<ContextSpan>,
    message: Option<PendingMessage>,
    field: Option<Field>,
    text: String,
    /// `<lengthvariant>` children seen in the current translation or form.
    variants: usize,
    root_closed: bool,
}

impl<'a> ParseState<'a> {
    fn new(file_path: &'a str) -> Self {
        Self {
            file_path,
            stack: Vec::new(),
            catalog: None,
            context: None,
            context_span: None,
            spans: Vec::new(),
            message: None,
            field: None,
            text: String::new(),
            variants: 0,
            root_closed: false,
        }
    }

    fn parent(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    fn capture(&mut self, field: Field) {
        self.field = Some(field);
        self.text.clear();
        self.variants = 0;
    }

    fn open(&mut self, e: &BytesStart, line: usize, start: usize) -> TsResult<()> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let parent = self.parent().map(str::to_owned);

        match (parent.as_deref(), name.as_str()) {
            (None, "TS") if !self.root_closed => {
                let language = attribute(e, "language", line)?.ok_or_else(|| {
                    TsError::MissingAttribute {
                        line,
                        element: "TS".to_string(),
                        attribute: "language".to_string(),
                    }
                })?;
                let mut catalog = Catalog::new(self.file_path, language);
                catalog.version =
                    attribute(e, "version", line)?.unwrap_or_else(|| DEFAULT_TS_VERSION.to_string());
                catalog.source_language = attribute(e, "sourcelanguage", line)?;
                self.catalog = Some(catalog);
            }
            (None, _) => return Err(TsError::MissingRoot),
            (Some("TS"), "context") => {
                self.context = Some(Context::new(String::new()));
                self.context_span = Some(ContextSpan {
                    span: start..start,
                    messages: Vec::new(),
                });
            }
            (_, "context") => {
                return Err(structure_error(line, "<context> must be a child of <TS>"));
            }
            (Some("context"), "name") => self.capture(Field::ContextName),
            (Some("context"), "message") => {
                let numerus = attribute(e, "numerus", line)?.is_some_and(|v| v == "yes");
                self.message = Some(PendingMessage {
                    line,
                    start,
                    numerus,
                    ..Default::default()
                });
            }
            (_, "message") => {
                return Err(structure_error(line, "<message> must be a child of <context>"));
            }
            (Some("message"), "location") => {
                let location = Location {
                    filename: attribute(e, "filename", line)?.unwrap_or_default(),
                    line: attribute(e, "line", line)?,
                };
                if let Some(message) = self.message.as_mut() {
                    message.locations.push(location);
                }
            }
            (Some("message"), "source") => self.capture(Field::Source),
            (Some("message"), "comment") => self.capture(Field::Comment),
            (Some("message"), "extracomment") => self.capture(Field::ExtraComment),
            (Some("message"), "translatorcomment") => self.capture(Field::TranslatorComment),
            (Some("message"), "translation") => {
                let kind = TranslationType::from_attr(attribute(e, "type", line)?.as_deref());
                if let Some(message) = self.message.as_mut() {
                    message.kind = kind;
                }
                self.capture(Field::Translation);
            }
            (Some("translation"), "numerusform") => {
                if let Some(message) = self.message.as_mut() {
                    message.forms.get_or_insert_with(Vec::new);
                }
                self.capture(Field::NumerusForm);
            }
            (Some("translation" | "numerusform"), "lengthvariant") => {
                self.variants += 1;
                // The first variant is the text of record.
                if self.variants == 1 {
                    self.text.clear();
                }
            }
            _ => {}
        }

        self.stack.push(name);
        Ok(())
    }

    fn text(&mut self, text: &str) {
        let Some(field) = self.field else {
            return;
        };
        let Some(top) = self.parent() else {
            return;
        };
        let captured = if top == "lengthvariant" {
            self.variants == 1
        } else {
            top == field.element() && self.variants == 0
        };
        if captured {
            self.text.push_str(text);
        }
    }

    fn close(&mut self, line: usize, end: usize) -> TsResult<()> {
        let Some(name) = self.stack.pop() else {
            return Err(structure_error(line, "unexpected end tag"));
        };
        let parent = self.parent().map(str::to_owned);

        match (parent.as_deref(), name.as_str()) {
            (None, "TS") => self.root_closed = true,
            (Some("TS"), "context") => {
                if let (Some(context), Some(catalog)) = (self.context.take(), self.catalog.as_mut())
                {
                    catalog.contexts.push(context);
                    if let Some(mut span) = self.context_span.take() {
                        span.span.end = end;
                        self.spans.push(span);
                    }
                }
            }
            (Some("context"), "name") => {
                let text = self.take_text();
                if let Some(context) = self.context.as_mut() {
                    context.name = text;
                }
            }
            (Some("context"), "message") => {
                if let Some(pending) = self.message.take() {
                    let start = pending.start;
                    let message = pending.into_message()?;
                    if let Some(context) = self.context.as_mut() {
                        context.messages.push(message);
                    }
                    if let Some(span) = self.context_span.as_mut() {
                        span.messages.push(start..end);
                    }
                }
            }
            (Some("message"), "source") => {
                let text = self.take_text();
                self.with_message(|m| m.source = Some(text));
            }
            (Some("message"), "comment") => {
                let text = self.take_text();
                self.with_message(|m| m.comment = Some(text));
            }
            (Some("message"), "extracomment") => {
                let text = self.take_text();
                self.with_message(|m| m.extra_comment = Some(text));
            }
            (Some("message"), "translatorcomment") => {
                let text = self.take_text();
                self.with_message(|m| m.translator_comment = Some(text));
            }
            (Some("message"), "translation") => {
                let text = self.take_text();
                self.with_message(|m| {
                    if m.forms.is_none() {
                        m.single = Some(text);
                    }
                });
            }
            (Some("translation"), "numerusform") => {
                let text = self.take_text();
                self.with_message(|m| m.forms.get_or_insert_with(Vec::new).push(text));
                self.field = Some(Field::Translation);
            }
            _ => {}
        }
        Ok(())
    }

    fn take_text(&mut self) -> String {
        self.field = None;
        self.variants = 0;
        mem::take(&mut self.text)
    }

    fn with_message(&mut self, f: impl FnOnce(&mut PendingMessage)) {
        if let Some(message) = self.message.as_mut() {
            f(message);
        }
    }

    fn finish(self, last_line: usize) -> TsResult<(Catalog, Vec<ContextSpan>)> {
        if let Some(open) = self.stack.last() {
            return Err(xml_error(
                last_line,
                format!("unexpected end of file, <{}> is not closed", open),
            ));
        }
        let catalog = self.catalog.ok_or(TsError::MissingRoot)?;
        Ok((catalog, self.spans))
    }
}
