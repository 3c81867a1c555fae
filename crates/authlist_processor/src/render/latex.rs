/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! LaTeX output format.
//!
//! Produces the `\author[orcid]{name}` / `\affiliation{...}` pairs used by
//! revtex and similar document classes.

use authlist_core::Config;

use super::format::OutputFormat;
use crate::values::join_words;

/// LaTeX renderer.
#[derive(Debug, Clone)]
pub struct Latex {
    /// Joins the words of a name; `~` keeps a name on one line.
    pub name_separator: String,
}

impl Default for Latex {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl OutputFormat for Latex {
    fn from_config(config: &Config) -> Self {
        Self {
            name_separator: config.name_separator().to_string(),
        }
    }

    fn author(&self, name: &str, orcid: Option<&str>) -> String {
        let name = join_words(name, &self.name_separator);
        match orcid {
            Some(orcid) => format!(r"\author[{}]{{{}}}", orcid, name),
            None => format!(r"\author{{{}}}", name),
        }
    }

    fn affiliation(&self, institution: &str) -> String {
        format!(r"\affiliation{{{}}}", institution)
    }
}
