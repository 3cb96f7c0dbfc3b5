//! Pass identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PassId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PassIdError {
    /// The input string is empty.
    #[error("pass identifier cannot be empty")]
    Empty,
}

/// The identifier of an issued pass.
///
/// A `PassId` is used interchangeably as the store key, the barcode payload,
/// and the unique id of a pass. It is derived verbatim from the holder's
/// phone number at issuance - no normalization, hashing, or uniqueness check
/// is performed.
///
/// ## Constraints
///
/// - Must not be empty
///
/// ## Examples
///
/// ```
/// use gatepass_core::PassId;
///
/// assert!(PassId::parse("555-1234").is_ok());
/// assert!(PassId::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PassId(String);

impl PassId {
    /// Parse a `PassId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PassIdError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, PassIdError> {
        if s.is_empty() {
            return Err(PassIdError::Empty);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PassId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PassId {
    type Err = PassIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PassId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = PassId::parse("555-1234").unwrap();
        assert_eq!(id.as_str(), "555-1234");
    }

    #[test]
    fn test_parse_preserves_input_verbatim() {
        // No normalization: whitespace and formatting survive untouched
        let id = PassId::parse("+1 (555) 123 4567").unwrap();
        assert_eq!(id.as_str(), "+1 (555) 123 4567");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(PassId::parse(""), Err(PassIdError::Empty)));
    }

    #[test]
    fn test_serde_transparent() {
        let id = PassId::parse("555-1234").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"555-1234\"");

        let back: PassId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display() {
        let id = PassId::parse("555-1234").unwrap();
        assert_eq!(id.to_string(), "555-1234");
    }
}
