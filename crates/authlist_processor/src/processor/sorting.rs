/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Last-name ordering of authors.

use authlist_core::{Author, Database};
use tracing::debug;

use crate::error::ProcessorError;

/// Sort key for a name: the last word, then the preceding words in order.
///
/// Words are split on whitespace only, so `van_Dijk` is a single word and
/// sorts under `v`.
pub fn last_name_first(name: &str) -> Vec<&str> {
    let mut words: Vec<&str> = name.split_whitespace().collect();
    if let Some(last) = words.pop() {
        words.insert(0, last);
    }
    words
}

/// Indices that put `names` in last-name order. Equal keys keep their
/// original relative order.
pub fn argsort_names<S: AsRef<str>>(names: &[S]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..names.len()).collect();
    order.sort_by_key(|&i| last_name_first(names[i].as_ref()));
    order
}

pub struct Sorter<'a> {
    database: &'a Database,
}

impl<'a> Sorter<'a> {
    pub fn new(database: &'a Database) -> Self {
        Self { database }
    }

    /// Resolve a tier's ids and return the authors in last-name order.
    pub fn sort_tier<'b>(
        &self,
        ids: &'b [String],
    ) -> Result<Vec<(&'b str, &'a Author)>, ProcessorError> {
        let authors = ids
            .iter()
            .map(|id| {
                self.database
                    .author(id)
                    .map(|author| (id.as_str(), author))
                    .ok_or_else(|| ProcessorError::UnknownAuthor(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let names: Vec<&str> = authors.iter().map(|(_, a)| a.name.as_str()).collect();
        let sorted: Vec<_> = argsort_names(&names)
            .into_iter()
            .map(|i| authors[i])
            .collect();

        debug!(
            order = ?sorted.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            "sorted tier"
        );
        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_name_first() {
        assert_eq!(last_name_first("Jane Q Doe"), vec!["Doe", "Jane", "Q"]);
        assert_eq!(last_name_first("Plato"), vec!["Plato"]);
        assert_eq!(last_name_first("Jan van_Dijk"), vec!["van_Dijk", "Jan"]);
        assert!(last_name_first("").is_empty());
    }

    #[test]
    fn test_argsort_by_last_name() {
        let names = ["Jane Smith", "Bob Adams", "Carl Jones"];
        assert_eq!(argsort_names(&names), vec![1, 2, 0]);
    }

    #[test]
    fn test_first_names_break_ties() {
        let names = ["Zoe Doe", "Adam Doe", "Adam B Doe", "Adam A Doe"];
        assert_eq!(argsort_names(&names), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_stable_for_equal_names() {
        let names = ["Jane Doe", "Al Zed", "Jane  Doe", "Jane Doe"];
        assert_eq!(argsort_names(&names), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_uppercase_before_lowercase() {
        let names = ["Jan van_Dijk", "Ann Zed"];
        assert_eq!(argsort_names(&names), vec![1, 0]);
    }

    #[test]
    fn test_empty() {
        assert!(argsort_names::<&str>(&[]).is_empty());
    }
}
