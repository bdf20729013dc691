//! UCSC terminal fallback
//!
//! Not a web service client: the record is synthesized entirely from
//! the variant's own fields plus a genome-browser URL, so it can never
//! be unavailable. This is what makes resolution total.

use async_trait::async_trait;

use crate::annotate::sources::{AnnotationSourceClient, SourceOutcome};
use crate::annotate::{AnnotationRecord, AnnotationSource};
use crate::config::AnnotateConfig;
use crate::vcf::VariantRecord;

/// Terminal fallback that always produces a record.
#[derive(Debug, Clone)]
pub struct UcscFallback {
    /// Genome browser database name templated into the link
    db: String,
}

impl UcscFallback {
    /// Create a fallback for the configured browser database.
    pub fn new(config: &AnnotateConfig) -> Self {
        Self {
            db: config.ucsc_db.clone(),
        }
    }

    /// Synthesize the fallback record for a variant.
    ///
    /// Infallible and side-effect free; the browser link carries the
    /// chromosome and position so the variant is still inspectable by
    /// hand when no source had data.
    pub fn synthesize(&self, variant: &VariantRecord) -> AnnotationRecord {
        let mut record = AnnotationRecord::from_variant(variant, AnnotationSource::Ucsc);
        record.gene = "Unknown".to_string();
        record.clinical_significance = "Not available".to_string();
        record.condition = "No data".to_string();
        record.link = format!(
            "https://genome.ucsc.edu/cgi-bin/hgTracks?db={}&position=chr{}:{}",
            self.db, variant.chrom, variant.pos
        );
        record
    }
}

#[async_trait]
impl AnnotationSourceClient for UcscFallback {
    fn source(&self) -> AnnotationSource {
        AnnotationSource::Ucsc
    }

    async fn try_annotate(&self, variant: &VariantRecord) -> SourceOutcome {
        SourceOutcome::Annotated(self.synthesize(variant))
    }
}
