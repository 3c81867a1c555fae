/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Authlist Processor
//!
//! Turns an author database and a tier list into the author/affiliation and
//! acknowledgement blocks of a paper's front matter.
//!
//! # Example
//!
//! ```rust
//! use authlist_processor::{Database, Processor, TierList};
//!
//! let db: Database = serde_json::from_str(r#"{
//!     "authors": {"a1": ["Jane Doe", "", ["i1"], ["k1"]]},
//!     "institutions": {"i1": "Uni X"},
//!     "acknowledgements": {"k1": "We {thank} {author}, who {is} great"}
//! }"#).unwrap();
//! let tiers: TierList = "a1".parse().unwrap();
//!
//! let processor = Processor::new(db, tiers);
//! assert_eq!(
//!     processor.author_block().unwrap(),
//!     vec![r"\author{Jane~Doe} \affiliation{Uni X}"]
//! );
//! assert_eq!(
//!     processor.acknowledgement_block().unwrap(),
//!     vec!["We thanks JD, who is great."]
//! );
//! ```

pub mod error;
pub mod io;
pub mod processor;
pub mod render;
pub mod values;

pub use error::{ProcessorError, TemplateError};
pub use processor::acknowledgements::AcknowledgementTally;
pub use processor::sorting::argsort_names;
pub use processor::Processor;
pub use values::{comma_and, initials};

// Re-export the data model for convenience
pub use authlist_core::{Author, Config, Database, OutputKind, TierList};
