//! Annotation source clients
//!
//! Each client implements [`AnnotationSourceClient`]: one outbound
//! request (bounded by the configured timeout) mapped into the common
//! [`AnnotationRecord`] shape, or a non-fatal [`SourceOutcome::Unavailable`].
//! Any network failure, non-2xx status, or unexpected response shape
//! collapses to Unavailable — the resolver moves on to the next source.
//! The reason is kept so it stays observable in logs and tests.

use async_trait::async_trait;
use std::fmt;

use crate::annotate::{AnnotationRecord, AnnotationSource};
use crate::vcf::VariantRecord;

pub mod ensembl;
pub mod myvariant;
pub mod ncbi;
pub mod ucsc;

pub use ensembl::EnsemblClient;
pub use myvariant::MyVariantClient;
pub use ncbi::NcbiClient;
pub use ucsc::UcscFallback;

/// Why a source could not annotate a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// Connection failure or request timeout
    Network(String),
    /// Non-success HTTP status
    Status(u16),
    /// Response body could not be navigated as expected
    UnexpectedShape(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::Network(msg) => write!(f, "network error: {}", msg),
            UnavailableReason::Status(code) => write!(f, "HTTP {}", code),
            UnavailableReason::UnexpectedShape(msg) => {
                write!(f, "unexpected response shape: {}", msg)
            }
        }
    }
}

/// Outcome of asking one source to annotate one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome {
    /// The source answered; the record's `source` field names it.
    Annotated(AnnotationRecord),
    /// The source could not annotate this variant. Never fatal.
    Unavailable(UnavailableReason),
}

impl SourceOutcome {
    /// Shorthand used in tests and match guards.
    pub fn is_annotated(&self) -> bool {
        matches!(self, SourceOutcome::Annotated(_))
    }
}

/// Capability shared by all annotation sources.
///
/// `try_annotate` makes at most one outbound call and never returns an
/// error: every failure mode is an [`SourceOutcome::Unavailable`]. No
/// caching — each variant independently re-queries every source it
/// reaches.
#[async_trait]
pub trait AnnotationSourceClient: Send + Sync {
    /// Which source this client queries.
    fn source(&self) -> AnnotationSource;

    /// Try to annotate one variant.
    async fn try_annotate(&self, variant: &VariantRecord) -> SourceOutcome;
}

/// Map a reqwest error to an [`UnavailableReason`].
pub(crate) fn network_unavailable(e: &reqwest::Error) -> SourceOutcome {
    SourceOutcome::Unavailable(UnavailableReason::Network(e.to_string()))
}
