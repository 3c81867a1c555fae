/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use authlist_core::Config;

use super::format::OutputFormat;
use crate::values::join_words;

#[derive(Debug, Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn from_config(_config: &Config) -> Self {
        PlainText
    }

    fn author(&self, name: &str, orcid: Option<&str>) -> String {
        let name = join_words(name, " ");
        match orcid {
            Some(orcid) => format!("{} [{}]", name, orcid),
            None => name,
        }
    }

    fn affiliation(&self, institution: &str) -> String {
        format!("({})", institution)
    }

    fn entry(&self, author: String, affiliations: Vec<String>) -> String {
        if affiliations.is_empty() {
            return author;
        }
        format!("{} {}", author, affiliations.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry() {
        let plain = PlainText;
        let author = plain.author("Jane_Q Doe", Some("0000-0001"));
        assert_eq!(author, "Jane Q Doe [0000-0001]");
        assert_eq!(plain.entry(author.clone(), vec![]), "Jane Q Doe [0000-0001]");
        assert_eq!(
            plain.entry(author, vec![plain.affiliation("Uni X")]),
            "Jane Q Doe [0000-0001] (Uni X)"
        );
    }
}
