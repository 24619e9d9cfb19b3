//! Canonical identifiers for locations and regions.

use explore_host::{slugify, title_case};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::{ExploreError, Result};

/// What an identifier argument is expected to be, for error messages.
pub(crate) const CONVERTIBLE: &str = "convertible to an Identifier";

/// A slug: the only valid key for locations and regions.
///
/// Two identifiers are equal iff their canonical forms are equal. Any string
/// that slugifies to something non-empty converts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Slugify `input` into an identifier.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_as(input, "identifier")
    }

    fn parse_as(input: &str, param: &'static str) -> Result<Self> {
        let slug = slugify(input);
        if slug.is_empty() {
            return Err(ExploreError::invalid(param, CONVERTIBLE, format!("{input:?}")));
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form: `cloud_nine` -> `Cloud Nine`.
    pub fn to_title_case(&self) -> String {
        title_case(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = ExploreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = ExploreError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}

/// Values accepted wherever an identifier argument is expected.
///
/// `param` names the argument in the error when conversion fails. `None`
/// fails as a missing argument.
pub trait IntoIdentifier {
    fn into_identifier(self, param: &'static str) -> Result<Identifier>;
}

impl IntoIdentifier for Identifier {
    fn into_identifier(self, _param: &'static str) -> Result<Identifier> {
        Ok(self)
    }
}

impl IntoIdentifier for &Identifier {
    fn into_identifier(self, _param: &'static str) -> Result<Identifier> {
        Ok(self.clone())
    }
}

impl IntoIdentifier for &str {
    fn into_identifier(self, param: &'static str) -> Result<Identifier> {
        Identifier::parse_as(self, param)
    }
}

impl IntoIdentifier for String {
    fn into_identifier(self, param: &'static str) -> Result<Identifier> {
        Identifier::parse_as(&self, param)
    }
}

impl IntoIdentifier for &String {
    fn into_identifier(self, param: &'static str) -> Result<Identifier> {
        Identifier::parse_as(self, param)
    }
}

impl<T: IntoIdentifier> IntoIdentifier for Option<T> {
    fn into_identifier(self, param: &'static str) -> Result<Identifier> {
        self.ok_or(ExploreError::missing(param))?
            .into_identifier(param)
    }
}
