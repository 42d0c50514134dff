//! # doi-metadata
//!
//! Resolve DOIs into bibliographic records using the content negotiation
//! offered by DOI registration agencies.
//!
//! A resolution asks the service for CSL-JSON metadata and, alongside it, an
//! APA-formatted citation. Author, year and journal are pulled out of the
//! JSON and the result is classified by how complete those fields are.
//!
//! Provides:
//! - **Library**: [`DoiClient`] with [`DoiClient::resolve`], plus the pure
//!   extraction and classification functions it is built from
//! - **CLI**: `doimeta` binary (feature `cli`)
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn example() -> doi_metadata::error::Result<()> {
//! use doi_metadata::DoiClient;
//!
//! let client = DoiClient::from_env()?;
//! let doi = client.locate("10.18637/jss.v048.i02")?;
//!
//! let record = client.resolve(&doi).await?;
//! println!("{:?}, {:?}, {:?}", record.author(), record.year(), record.journal());
//! if let Some(citation) = record.citation() {
//!     println!("{}", citation);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Classification without the network
//!
//! ```
//! use doi_metadata::{classify, MetadataRecord};
//!
//! let record = MetadataRecord::from(classify(Some("Frank, Henry S.".into()), Some(1970), None));
//! assert!(!record.is_complete());
//! assert_eq!(record.year(), Some(1970));
//! ```

pub mod citation;
pub mod client;
pub mod csl;
pub mod error;
pub mod extract;
pub mod location;
pub mod record;
pub mod resolve;
pub mod status;

// Re-export key types at the crate root.
pub use citation::CitationStyle;
pub use client::DoiClient;
pub use csl::{parse_csl_json, CslJson};
pub use error::MetadataError;
pub use extract::{extract_author, extract_journal, extract_year, flatten_names, AuthorName};
pub use location::{Doi, Location};
pub use record::{classify, Classified, Extensive, Incomplete, MetadataRecord, Minimal};
pub use status::interpret;
