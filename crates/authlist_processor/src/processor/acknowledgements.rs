/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The acknowledgement block.
//!
//! Acknowledgements are tallied while walking authors in visitation
//! order. Each reference an author makes bumps a running priority; an
//! acknowledgement keeps the priority it had when first referenced, so
//! the ones listed by leading authors come out first.

use authlist_core::Author;
use indexmap::IndexMap;
use tracing::debug;

use super::Processor;
use crate::error::{ProcessorError, TemplateError};
use crate::values::{initials, Template, TemplateValues};

/// An author credited on an acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contributor<'a> {
    pub id: &'a str,
    pub author: &'a Author,
}

/// The authors crediting one acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry<'a> {
    /// Value of the running counter when the acknowledgement was first seen.
    pub priority: usize,
    pub contributors: Vec<Contributor<'a>>,
}

/// Running tally of acknowledgement references.
#[derive(Debug, Default, Clone)]
pub struct AcknowledgementTally<'a> {
    entries: IndexMap<&'a str, TallyEntry<'a>>,
    counter: usize,
}

impl<'a> AcknowledgementTally<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every acknowledgement an author lists, in the author's order.
    pub fn visit(&mut self, id: &'a str, author: &'a Author) {
        for ackn in &author.acknowledgements {
            self.record(ackn, Contributor { id, author });
        }
    }

    /// Record one reference. The counter advances on every call, whether
    /// or not the acknowledgement is new.
    pub fn record(&mut self, ackn: &'a str, contributor: Contributor<'a>) {
        let priority = self.counter;
        self.entries
            .entry(ackn)
            .or_insert_with(|| TallyEntry {
                priority,
                contributors: Vec::new(),
            })
            .contributors
            .push(contributor);
        self.counter += 1;
    }

    /// Number of references recorded so far.
    pub fn references(&self) -> usize {
        self.counter
    }

    /// Distinct acknowledgements by ascending priority.
    pub fn into_ordered(self) -> Vec<(&'a str, TallyEntry<'a>)> {
        let mut ordered: Vec<_> = self.entries.into_iter().collect();
        ordered.sort_by_key(|(_, entry)| entry.priority);
        ordered
    }
}

impl Processor {
    /// Tally acknowledgements over all tiers.
    pub fn tally_acknowledgements(&self) -> Result<AcknowledgementTally<'_>, ProcessorError> {
        let mut tally = AcknowledgementTally::new();
        for (id, author) in self.visitation_order()? {
            tally.visit(id, author);
        }
        debug!(references = tally.references(), "tallied acknowledgements");
        Ok(tally)
    }

    /// One sentence per acknowledgement referenced by any author.
    pub fn acknowledgement_block(&self) -> Result<Vec<String>, ProcessorError> {
        self.tally_acknowledgements()?
            .into_ordered()
            .into_iter()
            .map(|(ackn, entry)| {
                debug!(
                    acknowledgement = ackn,
                    priority = entry.priority,
                    contributors = entry.contributors.len(),
                    "rendering acknowledgement"
                );
                self.render_acknowledgement(ackn, &entry)
            })
            .collect()
    }

    fn render_acknowledgement(
        &self,
        ackn: &str,
        entry: &TallyEntry<'_>,
    ) -> Result<String, ProcessorError> {
        let source = self.database.acknowledgement(ackn).ok_or_else(|| {
            ProcessorError::UnknownAcknowledgement {
                author: entry
                    .contributors
                    .first()
                    .map(|c| c.id.to_string())
                    .unwrap_or_default(),
                id: ackn.to_string(),
            }
        })?;

        let contributor_initials: Vec<String> = entry
            .contributors
            .iter()
            .map(|c| initials(&c.author.name))
            .collect();
        let values = TemplateValues::for_contributors(&contributor_initials);

        let wrap = |source: TemplateError| ProcessorError::Template {
            id: ackn.to_string(),
            source,
        };
        let sentence = Template::parse(source)
            .map_err(wrap)?
            .render(&values)
            .map_err(wrap)?;
        Ok(sentence + ".")
    }
}
