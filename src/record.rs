//! Bibliographic records, classified by how complete they are.
//!
//! A record is built once and never changes. [`classify`] picks
//! [`Minimal`] when author, year and journal are all known and
//! [`Incomplete`] otherwise; [`Extensive`] wraps either of them together
//! with the raw service response and, when available, formatted citation
//! text.

use crate::csl::CslJson;
use serde::Serialize;

/// A record with author, year and journal all present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Minimal {
    author: String,
    year: i32,
    journal: String,
}

impl Minimal {
    pub fn new(author: impl Into<String>, year: i32, journal: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            year,
            journal: journal.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn journal(&self) -> &str {
        &self.journal
    }
}

/// A record missing at least one of author, year and journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Incomplete {
    author: Option<String>,
    year: Option<i32>,
    journal: Option<String>,
}

impl Incomplete {
    /// Returns `None` when all three fields are present; such a record is
    /// [`Minimal`].
    pub fn new(author: Option<String>, year: Option<i32>, journal: Option<String>) -> Option<Self> {
        if author.is_some() && year.is_some() && journal.is_some() {
            return None;
        }
        Some(Self {
            author,
            year,
            journal,
        })
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn journal(&self) -> Option<&str> {
        self.journal.as_deref()
    }
}

/// The outcome of [`classify`]: either a [`Minimal`] or an [`Incomplete`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "completeness", rename_all = "snake_case")]
pub enum Classified {
    Minimal(Minimal),
    Incomplete(Incomplete),
}

impl Classified {
    pub fn author(&self) -> Option<&str> {
        match self {
            Self::Minimal(m) => Some(m.author()),
            Self::Incomplete(i) => i.author(),
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            Self::Minimal(m) => Some(m.year()),
            Self::Incomplete(i) => i.year(),
        }
    }

    pub fn journal(&self) -> Option<&str> {
        match self {
            Self::Minimal(m) => Some(m.journal()),
            Self::Incomplete(i) => i.journal(),
        }
    }

    pub fn is_minimal(&self) -> bool {
        matches!(self, Self::Minimal(_))
    }

    /// `"minimal"` or `"incomplete"`, as serialized.
    pub fn completeness_name(&self) -> &'static str {
        match self {
            Self::Minimal(_) => "minimal",
            Self::Incomplete(_) => "incomplete",
        }
    }
}

/// A classified record plus everything the service told us about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extensive {
    inner: Classified,
    citation: Option<String>,
    raw_metadata: CslJson,
}

impl Extensive {
    pub fn new(inner: Classified, citation: Option<String>, raw_metadata: CslJson) -> Self {
        Self {
            inner,
            citation,
            raw_metadata,
        }
    }

    pub fn inner(&self) -> &Classified {
        &self.inner
    }

    /// Formatted citation text, if the citation service delivered one.
    pub fn citation(&self) -> Option<&str> {
        self.citation.as_deref()
    }

    /// The CSL-JSON response exactly as parsed.
    pub fn raw_metadata(&self) -> &CslJson {
        &self.raw_metadata
    }
}

/// A bibliographic record of any completeness.
///
/// The field accessors work uniformly across variants; [`Extensive`]
/// delegates to its inner record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum MetadataRecord {
    Minimal(Minimal),
    Incomplete(Incomplete),
    Extensive(Extensive),
}

impl MetadataRecord {
    pub fn author(&self) -> Option<&str> {
        match self {
            Self::Minimal(m) => Some(m.author()),
            Self::Incomplete(i) => i.author(),
            Self::Extensive(e) => e.inner().author(),
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            Self::Minimal(m) => Some(m.year()),
            Self::Incomplete(i) => i.year(),
            Self::Extensive(e) => e.inner().year(),
        }
    }

    pub fn journal(&self) -> Option<&str> {
        match self {
            Self::Minimal(m) => Some(m.journal()),
            Self::Incomplete(i) => i.journal(),
            Self::Extensive(e) => e.inner().journal(),
        }
    }

    /// Citation text; only an [`Extensive`] record can carry one.
    pub fn citation(&self) -> Option<&str> {
        match self {
            Self::Extensive(e) => e.citation(),
            _ => None,
        }
    }

    /// Raw service response; only an [`Extensive`] record has one.
    pub fn raw_metadata(&self) -> Option<&CslJson> {
        match self {
            Self::Extensive(e) => Some(e.raw_metadata()),
            _ => None,
        }
    }

    /// Variant name, as serialized.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Minimal(_) => "minimal",
            Self::Incomplete(_) => "incomplete",
            Self::Extensive(_) => "extensive",
        }
    }

    /// Completeness of the fields: the variant itself, or for an
    /// [`Extensive`] record, that of its inner record.
    pub fn completeness_name(&self) -> &'static str {
        match self {
            Self::Minimal(_) => "minimal",
            Self::Incomplete(_) => "incomplete",
            Self::Extensive(e) => e.inner().completeness_name(),
        }
    }

    /// Whether author, year and journal are all known.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Minimal(_) => true,
            Self::Incomplete(_) => false,
            Self::Extensive(e) => e.inner().is_minimal(),
        }
    }
}

impl From<Classified> for MetadataRecord {
    fn from(classified: Classified) -> Self {
        match classified {
            Classified::Minimal(m) => Self::Minimal(m),
            Classified::Incomplete(i) => Self::Incomplete(i),
        }
    }
}

impl From<Extensive> for MetadataRecord {
    fn from(extensive: Extensive) -> Self {
        Self::Extensive(extensive)
    }
}

/// Classify a set of possibly-missing fields.
///
/// Absent fields stay absent; they are never replaced by empty strings or
/// zero.
pub fn classify(author: Option<String>, year: Option<i32>, journal: Option<String>) -> Classified {
    match (author, year, journal) {
        (Some(author), Some(year), Some(journal)) => {
            Classified::Minimal(Minimal::new(author, year, journal))
        }
        (author, year, journal) => Classified::Incomplete(Incomplete {
            author,
            year,
            journal,
        }),
    }
}
