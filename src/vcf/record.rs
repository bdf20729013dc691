//! Variant record representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single variant-call record: one genomic difference between a
/// sample and the reference.
///
/// Built by the extractor from one data line; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    /// Chromosome name (e.g., "chr1", "1", "X")
    pub chrom: String,

    /// 1-based position of the first base of the reference allele
    pub pos: u64,

    /// Variant identifier, typically an rsID; "." when unknown
    pub id: String,

    /// Reference allele
    pub reference: String,

    /// Alternate allele
    pub alternate: String,
}

impl VariantRecord {
    /// Create a new variant record.
    pub fn new(
        chrom: impl Into<String>,
        pos: u64,
        id: impl Into<String>,
        reference: impl Into<String>,
        alternate: impl Into<String>,
    ) -> Self {
        Self {
            chrom: chrom.into(),
            pos,
            id: id.into(),
            reference: reference.into(),
            alternate: alternate.into(),
        }
    }

    /// Check whether the identifier looks like a dbSNP rsID.
    pub fn has_rsid(&self) -> bool {
        self.id
            .strip_prefix("rs")
            .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
    }

    /// The identifier with any "rs" prefix removed, as used by the
    /// NCBI refsnp endpoint.
    pub fn rsid_digits(&self) -> &str {
        self.id.strip_prefix("rs").unwrap_or(&self.id)
    }
}

impl fmt::Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {}>{} ({})",
            self.chrom, self.pos, self.reference, self.alternate, self.id
        )
    }
}
