/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

use authlist_core::Config;

/// Trait for defining how an author entry is written in a specific markup.
///
/// Strings from the database are passed through unescaped: institutions
/// routinely carry markup of their own (accents, `\&`, line breaks).
pub trait OutputFormat: Clone {
    /// Build the format from the database configuration.
    fn from_config(config: &Config) -> Self;

    /// Render an author's name with its optional identifier.
    fn author(&self, name: &str, orcid: Option<&str>) -> String;

    /// Render a single affiliation.
    fn affiliation(&self, institution: &str) -> String;

    /// Combine an author and their affiliations into one line.
    ///
    /// The default separates every part with a single space and always
    /// emits the space after the author, even without affiliations.
    fn entry(&self, author: String, affiliations: Vec<String>) -> String {
        format!("{} {}", author, affiliations.join(" "))
    }
}
