/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The author/affiliation block.

use super::Processor;
use crate::error::ProcessorError;
use crate::render::OutputFormat;

impl Processor {
    /// One line per author in visitation order, each followed by the
    /// author's affiliations in the order the author lists them.
    pub fn author_block_with_format<F>(&self) -> Result<Vec<String>, ProcessorError>
    where
        F: OutputFormat,
    {
        let fmt = F::from_config(&self.config);

        self.visitation_order()?
            .into_iter()
            .map(|(id, author)| -> Result<String, ProcessorError> {
                let affiliations = author
                    .affiliations
                    .iter()
                    .map(|affil| {
                        self.database
                            .institution(affil)
                            .map(|institution| fmt.affiliation(institution))
                            .ok_or_else(|| ProcessorError::UnknownInstitution {
                                author: id.to_string(),
                                id: affil.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let name = fmt.author(&author.name, author.orcid.as_deref());
                Ok(fmt.entry(name, affiliations))
            })
            .collect()
    }
}
