//! RemoveMessage action.
//!
//! Removes stale messages from `.ts` files.
//! Used by the `tsglot clean` command.

use crate::issues::VanishedIssue;

use super::operation::Operation;
use super::traits::Action;

/// Action to remove messages from catalog files.
pub struct RemoveMessage;

impl Action<VanishedIssue> for RemoveMessage {
    fn to_operations(issues: &[VanishedIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::RemoveMessage {
                context: issue.context.clone(),
            })
            .collect()
    }
}
