//! Identifier-driven resolution: metadata plus citation text in one call.

use crate::client::DoiClient;
use crate::error::Result;
use crate::extract::{extract_author, extract_journal, extract_year};
use crate::location::Location;
use crate::record::{classify, Extensive, MetadataRecord};
use tracing::{debug, warn};

impl DoiClient {
    /// Resolve a location into an [`Extensive`] record.
    ///
    /// The CSL-JSON request decides the outcome: if it fails, so does the
    /// resolution, without waiting for the citation. The APA citation is
    /// requested alongside it and is optional; its failure only leaves the
    /// citation empty.
    pub async fn resolve<L: Location + ?Sized>(&self, location: &L) -> Result<MetadataRecord> {
        let json_request = self.fetch_json(location);
        let citation_request = self.fetch_apa(location);
        tokio::pin!(json_request, citation_request);

        // A metadata failure returns at once and drops the citation request.
        let (json, citation) = tokio::select! {
            json = &mut json_request => (json?, citation_request.await),
            citation = &mut citation_request => (json_request.await?, citation),
        };

        let citation = match citation {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(
                    url = %location.url(),
                    kind = e.kind_name(),
                    error = %e,
                    "citation unavailable, continuing without it"
                );
                None
            }
        };

        let inner = classify(
            extract_author(&json),
            extract_year(&json),
            extract_journal(&json),
        );
        debug!(complete = inner.is_minimal(), "metadata classified");

        Ok(Extensive::new(inner, citation, json).into())
    }
}
