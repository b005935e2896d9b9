//! # Context Records
//!
//! A [`ContextRecord`] describes a single request handed to a strategy: an
//! open set of named fields such as `name`, `account_number`, `email` or
//! `amount`. Nothing is validated up front; each strategy reads the fields it
//! needs and reports an [`ExtractError`] when one is absent or malformed.
//!
//! ```rust,ignore
//! let ctx = ContextRecord::new()
//!     .with("email", "ada@example.com")
//!     .with("amount", "10");
//!
//! let email = ctx.require("email")?;
//! let amount: u64 = ctx.parse("amount")?;
//! ```

use crate::message::Message;
use std::{collections::BTreeMap, fmt, str::FromStr};
use thiserror::Error;

/// Error type for context field access failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A required field is not present in the record.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// A field is present but could not be parsed.
    #[error("invalid value for field `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: String,
        /// Parser message.
        reason: String,
    },
}

/// An open set of named fields describing a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextRecord {
    fields: BTreeMap<String, String>,
}

impl ContextRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(name.into(), value.into())
    }

    /// Get an optional field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Get a field that must be present.
    pub fn require(&self, name: &str) -> Result<&str, ExtractError> {
        self.get(name)
            .ok_or_else(|| ExtractError::MissingField(name.to_string()))
    }

    /// Get a required field and parse it.
    pub fn parse<T>(&self, name: &str) -> Result<T, ExtractError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.require(name)?
            .parse()
            .map_err(|e: T::Err| ExtractError::Invalid {
                field: name.to_string(),
                reason: e.to_string(),
            })
    }

    /// Whether the record has the named field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Message for ContextRecord {}

impl<K, V> FromIterator<(K, V)> for ContextRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_and_required_fields() {
        let ctx = ContextRecord::new()
            .with("name", "Ada")
            .with("email", "ada@example.com");

        assert_eq!(ctx.get("name"), Some("Ada"));
        assert_eq!(ctx.get("account_number"), None);
        assert_eq!(ctx.require("email"), Ok("ada@example.com"));
        assert_eq!(
            ctx.require("account_number"),
            Err(ExtractError::MissingField("account_number".to_string()))
        );
    }

    #[test]
    fn test_parse_field() {
        let ctx: ContextRecord = [("amount", "10"), ("note", "ten")].into_iter().collect();

        assert_eq!(ctx.parse::<u64>("amount"), Ok(10));
        assert!(matches!(
            ctx.parse::<u64>("note"),
            Err(ExtractError::Invalid { ref field, .. }) if field == "note"
        ));
        assert_eq!(
            ctx.parse::<u64>("missing"),
            Err(ExtractError::MissingField("missing".to_string()))
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut ctx = ContextRecord::new();
        assert_eq!(ctx.insert("amount", "1"), None);
        assert_eq!(ctx.insert("amount", "2"), Some("1".to_string()));
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.iter().collect::<Vec<_>>(), vec![("amount", "2")]);
    }
}
