//! Configuration for the annotation resolver and the alignment pipeline.
//!
//! All settings are plain struct fields with documented defaults; there
//! is no ambient global state. Base URLs are overridable so tests and
//! mirrored deployments can point the clients elsewhere.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the annotation source clients.
#[derive(Debug, Clone)]
pub struct AnnotateConfig {
    /// Per-request timeout for every annotation source (default: 10 s)
    pub request_timeout: Duration,

    /// Base URL for the NCBI dbSNP beta API
    pub ncbi_base_url: String,

    /// Base URL for the MyVariant.info v1 API
    pub myvariant_base_url: String,

    /// Base URL for the Ensembl REST API
    pub ensembl_base_url: String,

    /// UCSC genome browser database used for the terminal fallback link
    /// (default: "hg38")
    pub ucsc_db: String,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            ncbi_base_url: "https://api.ncbi.nlm.nih.gov/variation/v0/beta".to_string(),
            myvariant_base_url: "https://myvariant.info/v1".to_string(),
            ensembl_base_url: "https://rest.ensembl.org".to_string(),
            ucsc_db: "hg38".to_string(),
        }
    }
}

impl AnnotateConfig {
    /// Override the request timeout, in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = Duration::from_secs(secs);
        self
    }
}

/// Configuration for the alignment and variant-calling pipeline.
///
/// The work directory and reference are explicit here rather than a
/// process-wide temp path.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Reference genome FASTA passed to `bwa mem` and `bcftools mpileup`
    pub reference_fasta: PathBuf,

    /// Directory for intermediate SAM/BAM/BCF files
    pub work_dir: PathBuf,
}

impl PipelineConfig {
    /// Create a pipeline configuration.
    pub fn new(reference_fasta: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            reference_fasta: reference_fasta.into(),
            work_dir: work_dir.into(),
        }
    }
}
