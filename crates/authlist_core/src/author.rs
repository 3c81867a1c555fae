/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author records.
//!
//! On disk an author is a positional array of four fields:
//!
//! ```json
//! ["Jane_Q Doe", "0000-0002-1825-0097", ["inst1", "inst2"], ["grant1"]]
//! ```
//!
//! In memory it is an [`Author`] with named fields, converted from the
//! positional [`AuthorRecord`] on deserialization.

use serde::Deserialize;

/// A single author entry in the database.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "AuthorRecord")]
pub struct Author {
    /// Full name as whitespace separated words. Underscores stand in for
    /// spaces that must not split a word (e.g. `van_der Berg`).
    pub name: String,
    /// Researcher identifier such as an ORCID. `None` when the record
    /// holds an empty string or `null`.
    pub orcid: Option<String>,
    /// Institution ids, in display order.
    pub affiliations: Vec<String>,
    /// Acknowledgement ids, in the order the author lists them.
    pub acknowledgements: Vec<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_orcid(mut self, orcid: impl Into<String>) -> Self {
        let orcid = orcid.into();
        self.orcid = (!orcid.is_empty()).then_some(orcid);
        self
    }

    pub fn with_affiliations<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affiliations = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_acknowledgements<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acknowledgements = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Positional wire form of an [`Author`].
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorRecord(String, Option<String>, Vec<String>, Vec<String>);

impl From<AuthorRecord> for Author {
    fn from(record: AuthorRecord) -> Self {
        let AuthorRecord(name, orcid, affiliations, acknowledgements) = record;
        Self {
            name,
            orcid: orcid.filter(|o| !o.is_empty()),
            affiliations,
            acknowledgements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_record() {
        let author: Author =
            serde_json::from_str(r#"["Jane Doe", "0000-0001", ["i1", "i2"], ["k1"]]"#).unwrap();
        assert_eq!(author.name, "Jane Doe");
        assert_eq!(author.orcid.as_deref(), Some("0000-0001"));
        assert_eq!(author.affiliations, vec!["i1", "i2"]);
        assert_eq!(author.acknowledgements, vec!["k1"]);
    }

    #[test]
    fn test_empty_and_null_orcid() {
        let empty: Author = serde_json::from_str(r#"["A B", "", [], []]"#).unwrap();
        let null: Author = serde_json::from_str(r#"["A B", null, [], []]"#).unwrap();
        assert!(empty.orcid.is_none());
        assert!(null.orcid.is_none());
    }

    #[test]
    fn test_builder_matches_record() {
        let built = Author::new("Jane Doe")
            .with_orcid("")
            .with_affiliations(["i1"]);
        let parsed: Author = serde_json::from_str(r#"["Jane Doe", "", ["i1"], []]"#).unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_rejects_object_form() {
        let result = serde_json::from_str::<Author>(r#"{"name": "Jane Doe"}"#);
        assert!(result.is_err());
    }
}
