//! Variant annotation via layered external sources
//!
//! Annotation tries a fixed priority order of public services per
//! variant — NCBI dbSNP, then MyVariant.info, then Ensembl VEP — and
//! falls back to a synthesized UCSC genome-browser record when none of
//! them can answer. Resolution is therefore total: every well-formed
//! variant gets exactly one [`AnnotationRecord`].
//!
//! # Example
//!
//! ```no_run
//! use vanno::{AnnotateConfig, Resolver, VariantRecord};
//!
//! # async fn demo() -> vanno::Result<()> {
//! let resolver = Resolver::new(&AnnotateConfig::default())?;
//! let variant = VariantRecord::new("chr1", 12345, "rs123", "A", "G");
//! let annotation = resolver.resolve(&variant).await;
//! println!("{} -> {} ({})", variant, annotation.gene, annotation.source);
//! # Ok(())
//! # }
//! ```

mod resolver;
pub mod sources;

pub use resolver::Resolver;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::vcf::VariantRecord;

/// The annotation source that produced a record.
///
/// Serialized names match the original service names exactly; they are
/// what ends up in the CSV `source` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationSource {
    /// NCBI dbSNP beta API
    #[serde(rename = "NCBI")]
    Ncbi,
    /// MyVariant.info
    #[serde(rename = "MyVariant.info")]
    MyVariant,
    /// Ensembl VEP REST API
    #[serde(rename = "Ensembl")]
    Ensembl,
    /// UCSC genome browser (terminal fallback, synthesized)
    #[serde(rename = "UCSC")]
    Ucsc,
}

impl AnnotationSource {
    /// Get the string representation of the source name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationSource::Ncbi => "NCBI",
            AnnotationSource::MyVariant => "MyVariant.info",
            AnnotationSource::Ensembl => "Ensembl",
            AnnotationSource::Ucsc => "UCSC",
        }
    }

    /// All sources in resolution priority order.
    pub fn priority_order() -> &'static [AnnotationSource] {
        &[
            AnnotationSource::Ncbi,
            AnnotationSource::MyVariant,
            AnnotationSource::Ensembl,
            AnnotationSource::Ucsc,
        ]
    }
}

impl fmt::Display for AnnotationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnnotationSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ncbi" => Ok(AnnotationSource::Ncbi),
            "myvariant" | "myvariant.info" => Ok(AnnotationSource::MyVariant),
            "ensembl" => Ok(AnnotationSource::Ensembl),
            "ucsc" => Ok(AnnotationSource::Ucsc),
            other => Err(format!("unknown annotation source: {}", other)),
        }
    }
}

/// A fully annotated variant.
///
/// Every field is always present: sources that do not provide a value
/// contribute a fixed placeholder instead, so downstream consumers can
/// treat records uniformly regardless of which source answered. The
/// serde renames define the CSV column names
/// (`chr,pos,ref,alt,gene,clinical_significance,condition,link,source`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Chromosome, copied from the variant record
    #[serde(rename = "chr")]
    pub chrom: String,

    /// 1-based position, copied from the variant record
    pub pos: u64,

    /// Reference allele, copied from the variant record
    #[serde(rename = "ref")]
    pub reference: String,

    /// Alternate allele, copied from the variant record
    #[serde(rename = "alt")]
    pub alternate: String,

    /// Gene symbol, or a placeholder ("NA" / "Unknown")
    pub gene: String,

    /// Clinical significance, or a placeholder ("NA" / "Not available")
    pub clinical_significance: String,

    /// Associated condition, or a source-specific marker
    pub condition: String,

    /// Reference URL for the annotation; may be empty
    pub link: String,

    /// Which source actually produced this record
    pub source: AnnotationSource,
}

impl AnnotationRecord {
    /// Start an annotation record from a variant's own fields.
    ///
    /// The caller fills in the source-specific annotation fields.
    pub fn from_variant(variant: &VariantRecord, source: AnnotationSource) -> Self {
        Self {
            chrom: variant.chrom.clone(),
            pos: variant.pos,
            reference: variant.reference.clone(),
            alternate: variant.alternate.clone(),
            gene: String::new(),
            clinical_significance: String::new(),
            condition: String::new(),
            link: String::new(),
            source,
        }
    }
}
