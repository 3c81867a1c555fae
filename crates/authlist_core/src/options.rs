/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering configuration.
//!
//! Every field is optional; a database without an `options` record renders
//! LaTeX exactly as the defaults below describe.

use serde::Deserialize;

/// Top-level rendering configuration.
#[derive(Debug, Default, PartialEq, Eq, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Markup used for the author block.
    #[serde(default)]
    pub format: OutputKind,
    /// String joining the words of a name in LaTeX output.
    /// Defaults to `~`, the LaTeX non-breaking space.
    #[serde(default)]
    pub name_separator: Option<String>,
}

impl Config {
    pub fn name_separator(&self) -> &str {
        self.name_separator.as_deref().unwrap_or("~")
    }
}

/// Output markup for the author block.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    #[default]
    Latex,
    Plain,
}
