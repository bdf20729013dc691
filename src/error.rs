//! Error types for vanno
//!
//! A single error enum covers the whole pipeline. Note that annotation
//! source failures are deliberately *not* represented here: an
//! unreachable or malformed source collapses to
//! [`crate::SourceOutcome::Unavailable`] and the resolver falls through
//! to the next source, so annotation itself can never fail.

use thiserror::Error;

/// Main error type for vanno operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VannoError {
    /// A variant-call line that cannot be parsed into a record
    #[error("Parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },

    /// File or stream I/O error
    #[error("I/O error: {msg}")]
    Io { msg: String },

    /// Invalid configuration
    #[error("Configuration error: {msg}")]
    Config { msg: String },

    /// Failure constructing the HTTP client
    #[error("HTTP client error: {msg}")]
    Http { msg: String },

    /// An external pipeline tool (bwa, samtools, bcftools) failed
    #[error("{tool} failed: {msg}")]
    Pipeline { tool: String, msg: String },

    /// CSV serialization error during export
    #[error("CSV export error: {msg}")]
    Export { msg: String },
}
