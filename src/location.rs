//! Where a metadata request goes.
//!
//! The resolution pipeline only ever asks a [`Location`] for its URL. [`Doi`]
//! is a thin location for DOIs; anything that already is a URL works too.

use crate::error::{MetadataError, Result};
use serde::Serialize;
use std::fmt;

/// Default DOI resolver.
pub const DEFAULT_RESOLVER: &str = "https://doi.org";

/// Something the citation service can be asked about.
pub trait Location {
    /// Absolute URL to request.
    fn url(&self) -> String;
}

impl Location for str {
    fn url(&self) -> String {
        self.to_string()
    }
}

impl Location for String {
    fn url(&self) -> String {
        self.clone()
    }
}

impl Location for url::Url {
    fn url(&self) -> String {
        self.as_str().to_string()
    }
}

impl<L: Location + ?Sized> Location for &L {
    fn url(&self) -> String {
        (**self).url()
    }
}

/// A DOI bound to the resolver that should answer for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doi {
    name: String,
    resolver: String,
}

impl Doi {
    /// Parse a DOI, accepting the usual `doi:` and resolver-URL prefixes.
    ///
    /// Only the shape is checked: a `10.` prefix and a non-empty suffix after
    /// the first `/`.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let lowered = input.to_ascii_lowercase();

        let prefixes = [
            "https://doi.org/",
            "http://doi.org/",
            "https://dx.doi.org/",
            "http://dx.doi.org/",
            "doi:",
        ];
        let name = prefixes
            .iter()
            .find(|p| lowered.starts_with(*p))
            .map(|p| input[p.len()..].trim_start())
            .unwrap_or(input);

        if !name.starts_with("10.") {
            return Err(MetadataError::InvalidIdentifier(input.to_string()));
        }
        match name.split_once('/') {
            Some((_, suffix)) if !suffix.is_empty() => Ok(Self {
                name: name.to_string(),
                resolver: DEFAULT_RESOLVER.to_string(),
            }),
            _ => Err(MetadataError::InvalidIdentifier(input.to_string())),
        }
    }

    /// Send requests for this DOI to a different resolver.
    pub fn with_resolver(mut self, resolver: impl Into<String>) -> Self {
        self.resolver = resolver.into();
        self
    }

    /// The bare DOI, e.g. `10.18637/jss.v048.i02`.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn resolver(&self) -> &str {
        &self.resolver
    }
}

impl Location for Doi {
    /// `<resolver>/<doi>`, with each path segment of the DOI percent-encoded
    /// so characters like `#`, `?` and `%` stay part of the path.
    fn url(&self) -> String {
        let fallback = || format!("{}/{}", self.resolver.trim_end_matches('/'), self.name);

        let Ok(mut base) = url::Url::parse(&self.resolver) else {
            return fallback();
        };
        match base.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().extend(self.name.split('/'));
            }
            Err(()) => return fallback(),
        }
        base.to_string()
    }
}

impl fmt::Display for Doi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare() {
        let doi = Doi::parse("10.18637/jss.v048.i02").unwrap();
        assert_eq!(doi.as_str(), "10.18637/jss.v048.i02");
        assert_eq!(doi.url(), "https://doi.org/10.18637/jss.v048.i02");
    }

    #[test]
    fn test_parse_prefixed() {
        for input in [
            "doi:10.1000/xyz",
            "DOI: 10.1000/xyz",
            "https://doi.org/10.1000/xyz",
            "http://dx.doi.org/10.1000/xyz",
        ] {
            assert_eq!(Doi::parse(input).unwrap().as_str(), "10.1000/xyz", "{input}");
        }
    }

    #[test]
    fn test_parse_rejects_non_doi() {
        assert!(Doi::parse("").is_err());
        assert!(Doi::parse("11.1000/xyz").is_err());
        assert!(Doi::parse("10.1000").is_err());
        assert!(Doi::parse("10.1000/").is_err());
    }

    #[test]
    fn test_custom_resolver() {
        let doi = Doi::parse("10.1000/xyz")
            .unwrap()
            .with_resolver("http://127.0.0.1:1234/");
        assert_eq!(doi.url(), "http://127.0.0.1:1234/10.1000/xyz");
    }

    #[test]
    fn test_resolver_with_path_prefix() {
        let doi = Doi::parse("10.1000/xyz")
            .unwrap()
            .with_resolver("http://127.0.0.1:1234/handle");
        assert_eq!(doi.url(), "http://127.0.0.1:1234/handle/10.1000/xyz");
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let doi = Doi::parse("10.1000/a#b?c%d").unwrap();
        assert_eq!(doi.as_str(), "10.1000/a#b?c%d");
        assert_eq!(doi.url(), "https://doi.org/10.1000/a%23b%3Fc%25d");

        let parsed = url::Url::parse(&doi.url()).unwrap();
        assert_eq!(parsed.query(), None);
        assert_eq!(parsed.fragment(), None);
    }

    #[test]
    fn test_sici_doi_stays_in_path() {
        let doi =
            Doi::parse("10.1002/(SICI)1097-4571(199806)49:8<693::AID-ASI4>3.0.CO;2-O").unwrap();
        let parsed = url::Url::parse(&doi.url()).unwrap();
        assert_eq!(
            parsed.path(),
            "/10.1002/(SICI)1097-4571(199806)49:8%3C693::AID-ASI4%3E3.0.CO;2-O"
        );
    }

    #[test]
    fn test_plain_strings_are_locations() {
        assert_eq!("https://example.org/a".url(), "https://example.org/a");
        let url = url::Url::parse("https://example.org/b").unwrap();
        assert_eq!(url.url(), "https://example.org/b");
    }
}
