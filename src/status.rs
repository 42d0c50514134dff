//! Mapping of response status codes onto resolution outcomes.
//!
//! Every response from the citation service passes through [`interpret`]
//! before its body is looked at.

use crate::error::{MetadataError, Result};

/// Interpret a response status code.
///
/// Only 200 is a success. 404, 204 and 406 have dedicated error kinds; every
/// other code (including other 2xx codes) is reported as
/// [`MetadataError::ServiceUnreachable`].
pub fn interpret(status: u16) -> Result<()> {
    match status {
        200 => Ok(()),
        404 => Err(MetadataError::IdentifierNotFound),
        204 => Err(MetadataError::NoMetadataAvailable),
        406 => Err(MetadataError::UnsupportedRepresentation),
        other => Err(MetadataError::ServiceUnreachable {
            status: Some(other),
            message: format!("unexpected response status {other}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok() {
        assert!(interpret(200).is_ok());
    }

    #[test]
    fn test_named_kinds() {
        assert!(matches!(interpret(404), Err(MetadataError::IdentifierNotFound)));
        assert!(matches!(interpret(204), Err(MetadataError::NoMetadataAvailable)));
        assert!(matches!(
            interpret(406),
            Err(MetadataError::UnsupportedRepresentation)
        ));
    }

    #[test]
    fn test_everything_else_is_unreachable() {
        for status in (0..=999u16).filter(|s| ![200, 204, 404, 406].contains(s)) {
            match interpret(status) {
                Err(MetadataError::ServiceUnreachable { status: Some(s), .. }) => {
                    assert_eq!(s, status)
                }
                other => panic!("status {status} mapped to {other:?}"),
            }
        }
    }
}
