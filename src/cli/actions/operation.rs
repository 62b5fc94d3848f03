//! Low-level catalog edits.
//!
//! Operations are produced by actions and applied per file: the catalog is
//! parsed again and the matching messages are cut out of the original text.

use std::{collections::BTreeMap, path::Path};

use anyhow::Result;
use colored::Colorize;

use crate::{
    core::{MessageContext, TsEditor},
    utils::{single_line, truncate_display},
};

/// Longest translation shown in previews, in terminal columns.
const PREVIEW_VALUE_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Remove the message at this location.
    RemoveMessage { context: MessageContext },
}

impl Operation {
    pub fn context(&self) -> &MessageContext {
        match self {
            Operation::RemoveMessage { context } => context,
        }
    }

    pub fn file_path(&self) -> &str {
        self.context().file_path()
    }

    /// Whether this operation targets the message named by
    /// (`context_name`, `source`) at `line`.
    fn matches(&self, context_name: &str, source: &str, line: usize) -> bool {
        let ctx = self.context();
        ctx.context == context_name && ctx.source == source && ctx.line() == line
    }
}

/// Group operations by file, keeping files in path order.
pub(crate) fn group_by_file(ops: &[Operation]) -> BTreeMap<&str, Vec<&Operation>> {
    let mut by_file: BTreeMap<&str, Vec<&Operation>> = BTreeMap::new();
    for op in ops {
        by_file.entry(op.file_path()).or_default().push(op);
    }
    by_file
}

/// Print what the operations would change, per file.
pub(crate) fn preview_operations(ops: &[Operation]) {
    for (file_path, file_ops) in group_by_file(ops) {
        println!("{}:", file_path.blue());
        for op in file_ops {
            let ctx = op.context();
            let value = truncate_display(&single_line(&ctx.value), PREVIEW_VALUE_WIDTH);
            println!(
                "  {} {}{}{}  {}",
                "-".dimmed(),
                single_line(&ctx.source),
                format!(" (line {})", ctx.line()).dimmed(),
                format!(": \"{}\"", value).dimmed(),
                format!("[{}]", ctx.context).dimmed()
            );
        }
        println!();
    }
}

/// Apply the removals for one file.
///
/// Returns the number of messages removed. The file is only written when
/// something was removed.
pub(crate) fn apply_remove_ops(file_path: &str, ops: &[&Operation]) -> Result<usize> {
    let mut editor = TsEditor::open(Path::new(file_path))?;

    let removed = editor.remove_messages(|context_name, message| {
        ops.iter()
            .any(|op| op.matches(context_name, &message.source, message.line))
    })?;

    if removed > 0 {
        editor.save()?;
    }

    Ok(removed)
}
