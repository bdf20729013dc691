//! Ensembl VEP annotation client
//!
//! Queries the VEP region endpoint keyed by chromosome, single-base
//! position range, and the two alleles. The response shape is stable
//! enough for typed deserialization: a JSON array of consequence
//! objects, from which only the first transcript consequence's gene
//! symbol is used.

use async_trait::async_trait;
use serde::Deserialize;

use crate::annotate::sources::{
    network_unavailable, AnnotationSourceClient, SourceOutcome, UnavailableReason,
};
use crate::annotate::{AnnotationRecord, AnnotationSource};
use crate::config::AnnotateConfig;
use crate::vcf::VariantRecord;

/// One element of the VEP region response array.
#[derive(Debug, Deserialize)]
pub struct VepConsequence {
    /// Per-transcript consequence predictions
    #[serde(default)]
    pub transcript_consequences: Vec<TranscriptConsequence>,
}

/// A single transcript consequence entry.
#[derive(Debug, Deserialize)]
pub struct TranscriptConsequence {
    /// Gene symbol, absent for some biotypes
    pub gene_symbol: Option<String>,
}

/// Client for the Ensembl REST VEP endpoint.
#[derive(Debug, Clone)]
pub struct EnsemblClient {
    client: reqwest::Client,
    base_url: String,
}

impl EnsemblClient {
    /// Create a client sharing an existing HTTP connection pool.
    pub fn new(client: reqwest::Client, config: &AnnotateConfig) -> Self {
        Self {
            client,
            base_url: config.ensembl_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint URL for a variant, keyed by coordinates and alleles.
    pub fn endpoint_url(&self, variant: &VariantRecord) -> String {
        format!(
            "{}/vep/human/region/{}:{}-{}/{}/{}?content-type=application/json",
            self.base_url,
            urlencoding::encode(&variant.chrom),
            variant.pos,
            variant.pos,
            urlencoding::encode(&variant.reference),
            urlencoding::encode(&variant.alternate),
        )
    }
}

/// Map a VEP region response into an annotation record.
///
/// Gene comes from the first consequence's first transcript
/// consequence; an empty response array or a transcript without a
/// symbol falls back to "NA".
pub fn annotation_from_consequences(
    variant: &VariantRecord,
    consequences: &[VepConsequence],
    url: &str,
) -> AnnotationRecord {
    let gene = consequences
        .first()
        .and_then(|c| c.transcript_consequences.first())
        .and_then(|tc| tc.gene_symbol.as_deref())
        .unwrap_or("NA");

    let mut record = AnnotationRecord::from_variant(variant, AnnotationSource::Ensembl);
    record.gene = gene.to_string();
    record.clinical_significance = "NA".to_string();
    record.condition = "From Ensembl".to_string();
    record.link = url.to_string();
    record
}

#[async_trait]
impl AnnotationSourceClient for EnsemblClient {
    fn source(&self) -> AnnotationSource {
        AnnotationSource::Ensembl
    }

    async fn try_annotate(&self, variant: &VariantRecord) -> SourceOutcome {
        let url = self.endpoint_url(variant);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return network_unavailable(&e),
        };

        let status = response.status();
        if !status.is_success() {
            return SourceOutcome::Unavailable(UnavailableReason::Status(status.as_u16()));
        }

        let consequences: Vec<VepConsequence> = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                return SourceOutcome::Unavailable(UnavailableReason::UnexpectedShape(
                    e.to_string(),
                ))
            }
        };

        SourceOutcome::Annotated(annotation_from_consequences(variant, &consequences, &url))
    }
}
