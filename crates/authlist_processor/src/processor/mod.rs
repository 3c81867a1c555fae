/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The author list processor.
//!
//! ## Ordering
//!
//! Both blocks visit authors in the same global order: tiers as given,
//! and within each tier by last name (see [`sorting`]). The author block
//! emits one line per visit. The acknowledgement block tallies the
//! acknowledgements each visited author lists and emits one sentence per
//! distinct acknowledgement, ordered by where it was first mentioned.

pub mod acknowledgements;
pub mod affiliations;
pub mod sorting;


use authlist_core::{Author, Config, Database, OutputKind, TierList};
use tracing::info;

use crate::error::ProcessorError;
use crate::render::{Latex, PlainText};

use self::sorting::Sorter;

/// Renders the author and acknowledgement blocks for a set of tiers.
#[derive(Debug)]
pub struct Processor {
    /// The author database.
    pub database: Database,
    /// The author tiers, highest priority first.
    pub tiers: TierList,
    /// Rendering configuration, taken from the database.
    pub config: Config,
}

impl Processor {
    pub fn new(database: Database, tiers: TierList) -> Self {
        let config = database.config();
        Self {
            database,
            tiers,
            config,
        }
    }

    /// Every author in visitation order, with the id it was listed under.
    ///
    /// Fails on the first id missing from the database.
    pub fn visitation_order(&self) -> Result<Vec<(&str, &Author)>, ProcessorError> {
        let sorter = Sorter::new(&self.database);
        let mut order = Vec::new();
        for tier in &self.tiers {
            order.extend(sorter.sort_tier(tier)?);
        }
        Ok(order)
    }

    /// Render the author block in the configured output format.
    pub fn author_block(&self) -> Result<Vec<String>, ProcessorError> {
        match self.config.format {
            OutputKind::Latex => self.author_block_with_format::<Latex>(),
            OutputKind::Plain => self.author_block_with_format::<PlainText>(),
        }
    }

    /// Render the full output: the author block, a blank line, then the
    /// acknowledgement block. Nothing is returned unless both succeed.
    pub fn render(&self) -> Result<String, ProcessorError> {
        let authors = self.author_block()?;
        let acknowledgements = self.acknowledgement_block()?;
        info!(
            authors = authors.len(),
            acknowledgements = acknowledgements.len(),
            "rendered blocks"
        );
        Ok(format!(
            "{}\n\n{}\n",
            authors.join("\n"),
            acknowledgements.join("\n")
        ))
    }
}
