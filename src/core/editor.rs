use std::{
    fs,
    ops::Range,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{data::Message, parsers::ts::parse_ts_with_spans};

/// Edits a `.ts` catalog in place.
///
/// Removed messages are cut out of the original text, so everything else
/// (length variants, `<oldsource>`, `<byte>`, comments, layout) stays
/// byte for byte as it was.
pub struct TsEditor {
    file_path: PathBuf,
    content: String,
}

impl TsEditor {
    /// Open a catalog for editing.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        Ok(Self {
            file_path: path.to_path_buf(),
            content,
        })
    }

    /// Remove every message for which `remove` returns true.
    ///
    /// A context whose messages are all removed is dropped as a whole.
    /// Returns the number of removed messages.
    pub fn remove_messages<F>(&mut self, mut remove: F) -> Result<usize>
    where
        F: FnMut(&str, &Message) -> bool,
    {
        let file_path = self.file_path.to_string_lossy();
        let (catalog, spans) = parse_ts_with_spans(&self.content, &file_path)
            .with_context(|| format!("Failed to parse catalog: {}", file_path))?;

        let mut cuts = Vec::new();
        let mut removed = 0;
        for (context, span) in catalog.contexts.iter().zip(&spans) {
            let doomed: Vec<Range<usize>> = context
                .messages
                .iter()
                .zip(&span.messages)
                .filter(|(message, _)| remove(&context.name, message))
                .map(|(_, range)| range.clone())
                .collect();
            if doomed.is_empty() {
                continue;
            }

            removed += doomed.len();
            if doomed.len() == context.messages.len() {
                cuts.push(whole_lines(&self.content, span.span.clone()));
            } else {
                cuts.extend(doomed.into_iter().map(|r| whole_lines(&self.content, r)));
            }
        }

        if !cuts.is_empty() {
            self.content = cut(&self.content, &mut cuts);
        }
        Ok(removed)
    }

    /// Save the modified content back to the file.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.file_path, &self.content)
            .with_context(|| format!("Failed to write catalog: {}", self.file_path.display()))
    }

    /// Get the current content as a string (for testing).
    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Widen `range` to its indentation and line break when nothing else
/// shares those lines.
fn whole_lines(content: &str, range: Range<usize>) -> Range<usize> {
    let line_start = content[..range.start].rfind('\n').map_or(0, |i| i + 1);
    let start = if content[line_start..range.start].trim().is_empty() {
        line_start
    } else {
        range.start
    };

    let line_end = content[range.end..]
        .find('\n')
        .map_or(content.len(), |i| range.end + i + 1);
    let end = if start == line_start && content[range.end..line_end].trim().is_empty() {
        line_end
    } else {
        range.end
    };

    start..end
}

fn cut(content: &str, cuts: &mut [Range<usize>]) -> String {
    cuts.sort_by_key(|r| r.start);
    let mut out = String::with_capacity(content.len());
    let mut pos = 0;
    for range in cuts.iter() {
        if range.start > pos {
            out.push_str(&content[pos..range.start]);
        }
        pos = pos.max(range.end);
    }
    out.push_str(&content[pos..]);
    out
}
