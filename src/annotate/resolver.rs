//! Annotation resolver
//!
//! Tries the source clients in fixed priority order per variant and
//! short-circuits on the first success. The UCSC fallback is held
//! separately from the client list so totality is guaranteed by
//! construction: `resolve` returns an [`AnnotationRecord`], not a
//! `Result`.

use tracing::debug;

use crate::annotate::sources::{
    AnnotationSourceClient, EnsemblClient, MyVariantClient, NcbiClient, SourceOutcome, UcscFallback,
};
use crate::annotate::AnnotationRecord;
use crate::config::AnnotateConfig;
use crate::error::VannoError;
use crate::vcf::VariantRecord;

/// Resolves each variant to exactly one annotation record.
///
/// Clients are consulted strictly in the order they are held (NCBI,
/// MyVariant.info, Ensembl for the default wiring); no client after the
/// first success is contacted, and no state is shared between
/// resolutions of different variants.
pub struct Resolver {
    clients: Vec<Box<dyn AnnotationSourceClient>>,
    fallback: UcscFallback,
}

impl Resolver {
    /// Wire up the default client chain over one shared HTTP pool.
    pub fn new(config: &AnnotateConfig) -> Result<Self, VannoError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("vanno/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| VannoError::Http {
                msg: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self::from_http_client(http, config))
    }

    fn from_http_client(http: reqwest::Client, config: &AnnotateConfig) -> Self {
        let clients: Vec<Box<dyn AnnotationSourceClient>> = vec![
            Box::new(NcbiClient::new(http.clone(), config)),
            Box::new(MyVariantClient::new(http.clone(), config)),
            Box::new(EnsemblClient::new(http, config)),
        ];
        Self {
            clients,
            fallback: UcscFallback::new(config),
        }
    }

    /// Build a resolver from explicit clients, in priority order.
    ///
    /// Used by tests to substitute stub clients; the UCSC fallback is
    /// still terminal.
    pub fn with_clients(
        clients: Vec<Box<dyn AnnotationSourceClient>>,
        fallback: UcscFallback,
    ) -> Self {
        Self { clients, fallback }
    }

    /// Resolve one variant. Total: always returns a record.
    pub async fn resolve(&self, variant: &VariantRecord) -> AnnotationRecord {
        for client in &self.clients {
            match client.try_annotate(variant).await {
                SourceOutcome::Annotated(record) => {
                    debug!(source = %client.source(), variant = %variant, "annotated");
                    return record;
                }
                SourceOutcome::Unavailable(reason) => {
                    debug!(
                        source = %client.source(),
                        variant = %variant,
                        %reason,
                        "source unavailable, falling through"
                    );
                }
            }
        }

        debug!(variant = %variant, "all sources unavailable, synthesizing UCSC record");
        self.fallback.synthesize(variant)
    }

    /// Resolve a batch of variants sequentially, preserving input order.
    ///
    /// One annotation per variant, 1:1. Each resolution is independent;
    /// no state is carried between variants.
    pub async fn resolve_all(&self, variants: &[VariantRecord]) -> Vec<AnnotationRecord> {
        let mut annotations = Vec::with_capacity(variants.len());
        for variant in variants {
            annotations.push(self.resolve(variant).await);
        }
        annotations
    }
}
