//! Caller-side normalization of typed codes.
//!
//! Blank input never reaches the lookup functions; it is rejected here.

use std::fmt;

use super::{LookupError, LookupResult};

/// A batch number or QR value typed or scanned by the user, trimmed and
/// upper-cased the way the entry field displays it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeQuery(String);

impl CodeQuery {
    pub fn parse(raw: &str) -> LookupResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CodeQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CodeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
