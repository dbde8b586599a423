use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depsift operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepsiftError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dependency tree JSON could not be parsed.
    #[error("Tree parse error: {message}")]
    #[diagnostic(help("Regenerate the file with `mvn dependency:tree -DoutputType=json`"))]
    TreeParse { message: String },

    /// The dependency:analyze log could not be parsed.
    #[error("Analysis log error: {message}")]
    #[diagnostic(help("Capture the full output of `mvn dependency:analyze`"))]
    AnalysisLog { message: String },

    /// Report export failed.
    #[error("Export error: {message}")]
    Export { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepsiftResult<T> = miette::Result<T>;
