/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Acknowledgement templates.
//!
//! A template is plain text with named placeholders in braces:
//!
//! ```text
//! {author} {ackn} support from grant XYZ
//! ```
//!
//! Only the four names of [`TemplateValues`] are defined. `{{` and `}}`
//! produce literal braces; any other brace is an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::TemplateError;
use crate::values::names::comma_and;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{(?P<name>[^{}]*)\}|[{}]").expect("template token regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for cap in TOKEN.captures_iter(source) {
            let Some(m) = cap.get(0) else { continue };
            literal.push_str(&source[last..m.start()]);
            last = m.end();

            match (m.as_str(), cap.name("name")) {
                ("{{", _) => literal.push('{'),
                ("}}", _) => literal.push('}'),
                (_, Some(name)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name.as_str().to_string()));
                }
                _ => return Err(TemplateError::UnmatchedBrace(m.start())),
            }
        }

        literal.push_str(&source[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    pub fn render(&self, values: &TemplateValues) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| TemplateError::UnknownPlaceholder(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

/// The values substituted into an acknowledgement template.
///
/// Verb forms agree with the number of contributors: one contributor takes
/// the third person singular (`thanks`, `acknowledges`, `is`), several take
/// the plural (`thank`, `acknowledge`, `are`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateValues {
    pub author: String,
    pub ackn: &'static str,
    pub thank: &'static str,
    pub is: &'static str,
}

impl TemplateValues {
    /// Build the values for a list of contributor initials.
    pub fn for_contributors<S: AsRef<str>>(initials: &[S]) -> Self {
        let plural = initials.len() > 1;
        Self {
            author: comma_and(initials),
            ackn: if plural { "acknowledge" } else { "acknowledges" },
            thank: if plural { "thank" } else { "thanks" },
            is: if plural { "are" } else { "is" },
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "author" => Some(self.author.as_str()),
            "ackn" => Some(self.ackn),
            "thank" => Some(self.thank),
            "is" => Some(self.is),
            _ => None,
        }
    }
}
