use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Run completed. Suspicious findings are a review queue,
///   not a failure, so they do not change the exit status.
/// - `Error` (2): Run aborted due to a fatal error (missing or malformed
///   reference file, config error).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed, regardless of findings.
    Success,
    /// Run aborted due to a fatal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
