use crate::error::{ParseError, RuntimeError};

/// Collects diagnostics from every stage of the pipeline.
///
/// The scanner and parser report recoverable errors here and keep going;
/// the interpreter reports the single runtime error that aborted a run.
/// Callers poll [`had_error`](Self::had_error) and
/// [`had_runtime_error`](Self::had_runtime_error) after each stage to decide
/// whether to continue, and drain [`diagnostics`](Self::diagnostics) to
/// display them.
///
/// # Example
/// ```
/// use tarn::{error::ErrorReporter, interpreter::lexer::scan};
///
/// let mut reporter = ErrorReporter::new();
/// scan("var x = @;", &mut reporter);
///
/// assert!(reporter.had_error());
/// assert_eq!(reporter.diagnostics().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ErrorReporter {
    diagnostics:       Vec<String>,
    had_error:         bool,
    had_runtime_error: bool,
}

impl ErrorReporter {
    /// Creates a reporter with no recorded diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lexical or syntax error and marks the run as failed.
    pub fn parse_error(&mut self, error: &ParseError) {
        self.diagnostics.push(error.to_string());
        self.had_error = true;
    }

    /// Records the runtime error that aborted an interpret call.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        self.diagnostics.push(error.to_string());
        self.had_runtime_error = true;
    }

    /// Returns `true` when any lexical or syntax error was recorded.
    #[must_use]
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Returns `true` when a runtime error was recorded.
    #[must_use]
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// All diagnostics recorded so far, in the order they were reported.
    #[must_use]
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Clears all diagnostics and both flags. The REPL calls this between
    /// lines so one bad line does not fail the whole session.
    pub fn reset(&mut self) {
        self.diagnostics.clear();
        self.had_error = false;
        self.had_runtime_error = false;
    }
}
