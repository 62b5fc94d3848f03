//! Render a catalog back to `.ts` XML.
//!
//! The layout follows what `lupdate` writes so that rewriting a catalog
//! (e.g. `tsglot clean --apply`) produces minimal diffs: `<context>` at
//! column zero, four spaces per nesting level below it.

use std::fmt::Write as _;

use crate::core::data::{Catalog, Message, TranslationForms};

const INDENT: &str = "    ";

pub fn write_ts(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    let _ = write!(
        out,
        "<TS version=\"{}\" language=\"{}\"",
        escape(&catalog.version),
        escape(&catalog.language)
    );
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape(source_language));
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        out.push_str("<context>\n");
        element(&mut out, 1, "name", &context.name);
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, message: &Message) {
    indent(out, 1);
    if message.numerus {
        out.push_str("<message numerus=\"yes\">\n");
    } else {
        out.push_str("<message>\n");
    }

    for location in &message.locations {
        indent(out, 2);
        let _ = write!(out, "<location filename=\"{}\"", escape(&location.filename));
        if let Some(line) = &location.line {
            let _ = write!(out, " line=\"{}\"", escape(line));
        }
        out.push_str("/>\n");
    }

    element(out, 2, "source", &message.source);
    if let Some(comment) = &message.comment {
        element(out, 2, "comment", comment);
    }
    if let Some(extra) = &message.extra_comment {
        element(out, 2, "extracomment", extra);
    }
    if let Some(note) = &message.translator_comment {
        element(out, 2, "translatorcomment", note);
    }

    indent(out, 2);
    out.push_str("<translation");
    if let Some(kind) = message.translation.kind.as_attr() {
        let _ = write!(out, " type=\"{}\"", kind);
    }
    match &message.translation.forms {
        TranslationForms::Single(text) => {
            let _ = writeln!(out, ">{}</translation>", escape(text));
        }
        TranslationForms::Numerus(forms) if forms.is_empty() => {
            out.push_str("></translation>\n");
        }
        TranslationForms::Numerus(forms) => {
            out.push_str(">\n");
            for form in forms {
                element(out, 3, "numerusform", form);
            }
            indent(out, 2);
            out.push_str("</translation>\n");
        }
    }

    indent(out, 1);
    out.push_str("</message>\n");
}

fn element(out: &mut String, level: usize, name: &str, text: &str) {
    indent(out, level);
    let _ = writeln!(out, "<{name}>{}</{name}>", escape(text));
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

/// Escape text and attribute values the way lupdate does.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
