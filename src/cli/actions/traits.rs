//! Action trait definition.
//!
//! Actions convert Issues into Operations. Each Action can be implemented
//! for multiple Issue types, providing type-safe handling.

use anyhow::Result;

use super::operation::{Operation, apply_remove_ops, group_by_file, preview_operations};

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of issues processed.
    pub processed: usize,
    /// Number of changes actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

impl std::ops::AddAssign for ActionStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.changes_applied += other.changes_applied;
        self.files_modified += other.files_modified;
    }
}

/// Action trait - converts Issues into Operations and executes them.
///
/// # Example
///
/// ```ignore
/// // In command code:
/// if apply {
///     RemoveMessage::run(&issues)?;
/// } else {
///     RemoveMessage::preview(&issues);
/// }
/// ```
pub trait Action<I> {
    /// Convert issues to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Execute the action (modify files).
    fn run(issues: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(issues);
        execute_operations(&ops)
    }

    /// Preview the action (dry-run mode).
    fn preview(issues: &[I]) {
        let ops = Self::to_operations(issues);
        preview_operations(&ops);
    }
}

pub(crate) fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut changes_applied = 0;
    let mut files_modified = 0;

    for (file_path, file_ops) in group_by_file(ops) {
        let applied = apply_remove_ops(file_path, &file_ops)?;
        if applied > 0 {
            changes_applied += applied;
            files_modified += 1;
        }
    }

    Ok(ActionStats {
        processed: ops.len(),
        changes_applied,
        files_modified,
    })
}
