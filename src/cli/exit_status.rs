use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status of the `tsglot` binary.
///
/// - `Success` (0): no errors (warnings alone do not fail)
/// - `Failure` (1): errors were found, or the command could not do its job
/// - `Error` (2): internal failure (bad config, unreadable directory, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}
