//! MyVariant.info annotation client
//!
//! Queries the v1 variant endpoint keyed by the identifier exactly as
//! given in the call file. The richest of the three live sources: it
//! can provide gene symbol, ClinVar clinical significance, an
//! associated condition, and an RCV accession for a ClinVar link.

use async_trait::async_trait;
use serde_json::Value;

use crate::annotate::sources::{
    network_unavailable, AnnotationSourceClient, SourceOutcome, UnavailableReason,
};
use crate::annotate::{AnnotationRecord, AnnotationSource};
use crate::config::AnnotateConfig;
use crate::vcf::VariantRecord;

/// Base URL for ClinVar variation links built from RCV accessions.
const CLINVAR_VARIATION_URL: &str = "https://www.ncbi.nlm.nih.gov/clinvar/variation";

/// Client for the MyVariant.info v1 API.
#[derive(Debug, Clone)]
pub struct MyVariantClient {
    client: reqwest::Client,
    base_url: String,
}

impl MyVariantClient {
    /// Create a client sharing an existing HTTP connection pool.
    pub fn new(client: reqwest::Client, config: &AnnotateConfig) -> Self {
        Self {
            client,
            base_url: config.myvariant_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint URL for a variant, keyed by its identifier as given.
    pub fn endpoint_url(&self, variant: &VariantRecord) -> String {
        format!(
            "{}/variant/{}",
            self.base_url,
            urlencoding::encode(&variant.id)
        )
    }
}

/// Map a MyVariant.info response body into an annotation record.
///
/// Field rules:
/// - gene from `gene.symbol`, default "NA";
/// - clinical significance from `clinvar.clinical_significance`,
///   default "Not available";
/// - condition from `clinvar.trait[0]` only when `trait` is a
///   non-empty list (it is sometimes a bare string), else "Unknown";
/// - link from `clinvar.rcv[0].accession` only when an `rcv` key is
///   present, else empty.
pub fn annotation_from_body(variant: &VariantRecord, body: &Value) -> AnnotationRecord {
    let gene = body
        .get("gene")
        .and_then(|g| g.get("symbol"))
        .and_then(Value::as_str)
        .unwrap_or("NA");

    let clinvar = body.get("clinvar");

    let clinical_significance = clinvar
        .and_then(|c| c.get("clinical_significance"))
        .and_then(Value::as_str)
        .unwrap_or("Not available");

    let condition = clinvar
        .and_then(|c| c.get("trait"))
        .and_then(Value::as_array)
        .and_then(|traits| traits.first())
        .and_then(Value::as_str)
        .unwrap_or("Unknown");

    // Link only when the rcv key exists at all; a present-but-odd rcv
    // value still yields a link with an empty accession.
    let link = match clinvar.and_then(|c| c.get("rcv")) {
        Some(rcv) => {
            let accession = rcv
                .get(0)
                .and_then(|entry| entry.get("accession"))
                .and_then(Value::as_str)
                .unwrap_or("");
            format!("{}/{}", CLINVAR_VARIATION_URL, accession)
        }
        None => String::new(),
    };

    let mut record = AnnotationRecord::from_variant(variant, AnnotationSource::MyVariant);
    record.gene = gene.to_string();
    record.clinical_significance = clinical_significance.to_string();
    record.condition = condition.to_string();
    record.link = link;
    record
}

#[async_trait]
impl AnnotationSourceClient for MyVariantClient {
    fn source(&self) -> AnnotationSource {
        AnnotationSource::MyVariant
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

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                return SourceOutcome::Unavailable(UnavailableReason::UnexpectedShape(
                    e.to_string(),
                ))
            }
        };

        SourceOutcome::Annotated(annotation_from_body(variant, &body))
    }
}
