// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! vanno: genomic variant annotation pipeline
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Extracts variant records from variant-call (VCF) text and annotates
//! each record by querying public annotation services in fixed priority
//! order (NCBI dbSNP, MyVariant.info, Ensembl VEP) with a UCSC genome
//! browser link as a guaranteed terminal fallback.
//!
//! # Example
//!
//! ```no_run
//! use vanno::{extract_variants, AnnotateConfig, Resolver};
//!
//! # async fn demo() -> vanno::Result<()> {
//! let variants = extract_variants("chr1\t12345\trs123\tA\tG\n");
//!
//! let resolver = Resolver::new(&AnnotateConfig::default())?;
//! let annotations = resolver.resolve_all(&variants).await;
//! assert_eq!(annotations.len(), variants.len());
//! # Ok(())
//! # }
//! ```

pub mod annotate;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod vcf;

// Re-export commonly used types
pub use annotate::sources::{AnnotationSourceClient, SourceOutcome, UnavailableReason};
pub use annotate::{AnnotationRecord, AnnotationSource, Resolver};
pub use config::{AnnotateConfig, PipelineConfig};
pub use error::VannoError;
pub use export::{write_csv, write_csv_file};
pub use vcf::{extract_variants, extract_variants_from_path, parse_variant_line, VariantRecord};

/// Result type alias for vanno operations
pub type Result<T> = std::result::Result<T, VannoError>;
