/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Error types for the processor.

use thiserror::Error;

/// Errors raised while loading input or rendering the blocks.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("unknown author id: {0:?}")]
    UnknownAuthor(String),

    #[error("author {author:?} references unknown institution: {id:?}")]
    UnknownInstitution { author: String, id: String },

    #[error("author {author:?} references unknown acknowledgement: {id:?}")]
    UnknownAcknowledgement { author: String, id: String },

    #[error("acknowledgement {id:?}: {source}")]
    Template {
        id: String,
        #[source]
        source: TemplateError,
    },

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while substituting an acknowledgement template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("undefined placeholder {{{0}}}")]
    UnknownPlaceholder(String),

    #[error("unmatched brace at byte {0}")]
    UnmatchedBrace(usize),
}
