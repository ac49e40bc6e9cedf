use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and every lookup resolved
/// - `Failure` (1): Command completed but fell back (missing key, unloaded locale)
/// - `Error` (2): Command failed (config error, unreadable messages, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but a lookup fell back or a precondition failed.
    Failure,
    /// Command failed due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
