//! NCBI dbSNP annotation client
//!
//! Queries the dbSNP beta refsnp endpoint keyed by the variant's rsID
//! with the "rs" prefix stripped. The refsnp payload is deeply nested
//! and large; only the SPDI variant base is extracted, with every level
//! of the path treated as optional.

use async_trait::async_trait;
use serde_json::Value;

use crate::annotate::sources::{
    network_unavailable, AnnotationSourceClient, SourceOutcome, UnavailableReason,
};
use crate::annotate::{AnnotationRecord, AnnotationSource};
use crate::config::AnnotateConfig;
use crate::vcf::VariantRecord;

/// Client for the NCBI dbSNP beta API.
#[derive(Debug, Clone)]
pub struct NcbiClient {
    client: reqwest::Client,
    base_url: String,
}

impl NcbiClient {
    /// Create a client sharing an existing HTTP connection pool.
    pub fn new(client: reqwest::Client, config: &AnnotateConfig) -> Self {
        Self {
            client,
            base_url: config.ncbi_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint URL for a variant, built from its rsID digits.
    pub fn endpoint_url(&self, variant: &VariantRecord) -> String {
        format!(
            "{}/refsnp/{}",
            self.base_url,
            urlencoding::encode(variant.rsid_digits())
        )
    }
}

/// Map a refsnp response body into an annotation record.
///
/// Gene comes from
/// `primary_snapshot_data.placements_with_allele[0].alleles[0].allele.spdi.variant_base`;
/// any missing level falls back to "NA". Clinical significance is not
/// part of this endpoint's payload.
pub fn annotation_from_body(variant: &VariantRecord, body: &Value, url: &str) -> AnnotationRecord {
    let gene = spdi_variant_base(body)
        .filter(|base| !base.is_empty())
        .unwrap_or("NA");

    let mut record = AnnotationRecord::from_variant(variant, AnnotationSource::Ncbi);
    record.gene = gene.to_string();
    record.clinical_significance = "NA".to_string();
    record.condition = "From NCBI".to_string();
    record.link = url.to_string();
    record
}

/// Navigate the nested refsnp placement path to the SPDI variant base.
fn spdi_variant_base(body: &Value) -> Option<&str> {
    body.get("primary_snapshot_data")?
        .get("placements_with_allele")?
        .get(0)?
        .get("alleles")?
        .get(0)?
        .get("allele")?
        .get("spdi")?
        .get("variant_base")?
        .as_str()
}

#[async_trait]
impl AnnotationSourceClient for NcbiClient {
    fn source(&self) -> AnnotationSource {
        AnnotationSource::Ncbi
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

        SourceOutcome::Annotated(annotation_from_body(variant, &body, &url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variant() -> VariantRecord {
        VariantRecord::new("chr1", 12345, "rs123", "A", "G")
    }

    #[test]
    fn test_endpoint_strips_rs_prefix() {
        let client = NcbiClient::new(reqwest::Client::new(), &AnnotateConfig::default());
        assert_eq!(
            client.endpoint_url(&variant()),
            "https://api.ncbi.nlm.nih.gov/variation/v0/beta/refsnp/123"
        );
    }

    #[test]
    fn test_mapping_extracts_variant_base() {
        let body = json!({
            "primary_snapshot_data": {
                "placements_with_allele": [
                    {"alleles": [{"allele": {"spdi": {"variant_base": "G"}}}]}
                ]
            }
        });
        let record = annotation_from_body(&variant(), &body, "http://example/refsnp/123");
        assert_eq!(record.gene, "G");
        assert_eq!(record.clinical_significance, "NA");
        assert_eq!(record.condition, "From NCBI");
        assert_eq!(record.source, AnnotationSource::Ncbi);
        assert_eq!(record.link, "http://example/refsnp/123");
    }

    #[test]
    fn test_mapping_missing_level_falls_back_to_na() {
        let bodies = [
            json!({}),
            json!({"primary_snapshot_data": {}}),
            json!({"primary_snapshot_data": {"placements_with_allele": []}}),
            json!({"primary_snapshot_data": {"placements_with_allele": [{"alleles": []}]}}),
            json!({"primary_snapshot_data": {
                "placements_with_allele": [{"alleles": [{"allele": {}}]}]
            }}),
        ];
        for body in &bodies {
            let record = annotation_from_body(&variant(), body, "url");
            assert_eq!(record.gene, "NA", "body: {}", body);
        }
    }

    #[test]
    fn test_mapping_empty_variant_base_falls_back_to_na() {
        let body = json!({
            "primary_snapshot_data": {
                "placements_with_allele": [
                    {"alleles": [{"allele": {"spdi": {"variant_base": ""}}}]}
                ]
            }
        });
        assert_eq!(annotation_from_body(&variant(), &body, "url").gene, "NA");
    }
}
