//! Formatted citation text via content negotiation.
//!
//! Style selection is delegated entirely to the remote service; the returned
//! text is passed through as-is, inline markup included.

use crate::client::DoiClient;
use crate::error::Result;
use crate::location::Location;

/// Media type for BibTeX entries.
pub const BIBTEX: &str = "application/x-bibtex";

/// Well-known CSL style names understood by the DOI resolver.
pub struct CitationStyle;

impl CitationStyle {
    pub const APA: &'static str = "apa";
    pub const HARVARD: &'static str = "harvard3";
    pub const IEEE: &'static str = "ieee";
    pub const MLA: &'static str = "modern-language-association";
    pub const CHICAGO: &'static str = "chicago-author-date";
}

/// `Accept` header value asking for a bibliography entry in `style`.
pub fn bibliography_media_type(style: &str) -> String {
    format!("text/x-bibliography; style={}", style)
}

impl DoiClient {
    /// Fetch a formatted citation in the given CSL style.
    pub async fn fetch_citation<L: Location + ?Sized>(
        &self,
        location: &L,
        style: &str,
    ) -> Result<String> {
        let response = self
            .negotiate(location, &bibliography_media_type(style))
            .await?;
        Ok(response.text().await?)
    }

    /// Convenience: fetch an APA citation.
    pub async fn fetch_apa<L: Location + ?Sized>(&self, location: &L) -> Result<String> {
        self.fetch_citation(location, CitationStyle::APA).await
    }

    /// Fetch a BibTeX entry.
    pub async fn fetch_bibtex<L: Location + ?Sized>(&self, location: &L) -> Result<String> {
        let response = self.negotiate(location, BIBTEX).await?;
        Ok(response.text().await?)
    }
}
