//! CSL-JSON retrieval and normalization.

use crate::client::DoiClient;
use crate::error::{MetadataError, Result};
use crate::location::Location;
use serde_json::{Map, Value};

/// Media type for structured CSL-JSON metadata.
pub const CSL_JSON: &str = "application/vnd.citationstyles.csl+json";

/// A citation service response as a string-keyed JSON object.
///
/// Keys keep the order the service sent them in.
pub type CslJson = Map<String, Value>;

/// Parse a response body into [`CslJson`].
///
/// Anything that is not a JSON object at the top level is malformed.
pub fn parse_csl_json(body: &[u8]) -> Result<CslJson> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| MetadataError::MalformedMetadata(format!("Invalid CSL-JSON: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(MetadataError::MalformedMetadata(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl DoiClient {
    /// Fetch the CSL-JSON metadata for a location.
    pub async fn fetch_json<L: Location + ?Sized>(&self, location: &L) -> Result<CslJson> {
        let response = self.negotiate(location, CSL_JSON).await?;
        let body = response.bytes().await?;
        parse_csl_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn test_parse_object() {
        let json = parse_csl_json(br#"{"title": "A", "container-title": "B"}"#).unwrap();
        assert_eq!(json["title"], "A");
        assert_eq!(json["container-title"], "B");
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let json = parse_csl_json(br#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = json.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        assert!(matches!(
            parse_csl_json(b"<html>nope</html>"),
            Err(MetadataError::MalformedMetadata(_))
        ));
        assert!(matches!(
            parse_csl_json(b""),
            Err(MetadataError::MalformedMetadata(_))
        ));
    }

    #[test]
    fn test_parse_non_object_is_malformed() {
        let err = parse_csl_json(b"[1, 2]").unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[tokio::test]
    async fn test_fetch_json_sends_csl_accept_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/10.1000/xyz")
            .match_header("accept", CSL_JSON)
            .with_status(200)
            .with_header("content-type", CSL_JSON)
            .with_body(r#"{"DOI": "10.1000/xyz"}"#)
            .create_async()
            .await;

        let client = DoiClient::new().unwrap().with_resolver(server.url());
        let doi = client.locate("10.1000/xyz").unwrap();
        let json = client.fetch_json(&doi).await.unwrap();

        assert_eq!(json["DOI"], "10.1000/xyz");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_json_status_failure_skips_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/10.1000/missing")
            .with_status(404)
            .with_body("Resource not found.")
            .create_async()
            .await;

        let client = DoiClient::new().unwrap();
        let url = format!("{}/10.1000/missing", server.url());
        assert!(matches!(
            client.fetch_json(&url).await,
            Err(MetadataError::IdentifierNotFound)
        ));
    }

    #[tokio::test]
    async fn test_fetch_json_malformed_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/10.1000/broken")
            .with_status(200)
            .with_body("{not json")
            .create_async()
            .await;

        let client = DoiClient::new().unwrap();
        let url = format!("{}/10.1000/broken", server.url());
        assert!(matches!(
            client.fetch_json(&url).await,
            Err(MetadataError::MalformedMetadata(_))
        ));
    }
}
