//! Variant-call record extraction
//!
//! This module provides a minimal line-oriented reader for the
//! tab-delimited variant-call format: metadata lines start with `#`,
//! data lines carry at least five tab-separated fields
//! (CHROM, POS, ID, REF, ALT; further columns are ignored).
//!
//! Binary container formats (BAM, BCF) and the full VCF INFO/FORMAT
//! machinery are out of scope here; the annotation pipeline only needs
//! the five positional fields.

mod parser;
mod record;

pub use parser::{extract_variants, extract_variants_from_path, parse_variant_line};
pub use record::VariantRecord;
