/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The author database.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::author::Author;
use crate::options::Config;

/// Authors, institutions and acknowledgement templates keyed by id.
///
/// Maps keep the order of the source file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Database {
    pub authors: IndexMap<String, Author>,
    /// Institution id to display string.
    pub institutions: IndexMap<String, String>,
    /// Acknowledgement id to template string. Templates use the
    /// placeholders `{author}`, `{ackn}`, `{thank}` and `{is}`.
    pub acknowledgements: IndexMap<String, String>,
    #[serde(default)]
    pub options: Option<Config>,
}

impl Database {
    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.get(id)
    }

    pub fn institution(&self, id: &str) -> Option<&str> {
        self.institutions.get(id).map(String::as_str)
    }

    pub fn acknowledgement(&self, id: &str) -> Option<&str> {
        self.acknowledgements.get(id).map(String::as_str)
    }

    /// The rendering configuration, falling back to defaults.
    pub fn config(&self) -> Config {
        self.options.clone().unwrap_or_default()
    }
}
