//! Output channel for long-running tool invocations.

/// Receives progress, warnings and errors while external tools run.
///
/// The CLI implements this with coloured terminal output; library callers
/// can use [`LogReporter`] or their own implementation.
pub trait Reporter: Send + Sync {
    /// Progress information.
    fn info(&self, message: &str);

    /// Non-fatal problems, including every stderr line of a running tool.
    fn warning(&self, message: &str);

    /// Failures.
    fn error(&self, message: &str);

    /// Called for each stdout line of a running tool.
    fn on_stdout(&self, _line: &str) {}
}

/// [`Reporter`] that forwards everything to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warning(&self, message: &str) {
        log::warn!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }

    fn on_stdout(&self, line: &str) {
        log::debug!("{line}");
    }
}
