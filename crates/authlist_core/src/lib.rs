/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Authlist core types
//!
//! The data model shared by the processor and the command line tool: the
//! author database (authors, institutions and acknowledgement templates),
//! the tier list that orders authors into priority groups, and the optional
//! rendering configuration carried inside the database.
//!
//! # Example
//!
//! ```rust
//! use authlist_core::{Database, TierList};
//!
//! let json = r#"{
//!     "authors": {"a1": ["Jane Doe", "", ["i1"], ["k1"]]},
//!     "institutions": {"i1": "Uni X"},
//!     "acknowledgements": {"k1": "We {thank} {author}"}
//! }"#;
//! let db: Database = serde_json::from_str(json).unwrap();
//! assert_eq!(db.authors["a1"].name, "Jane Doe");
//! assert!(db.authors["a1"].orcid.is_none());
//!
//! let tiers: TierList = "a1\n".parse().unwrap();
//! assert_eq!(tiers.len(), 1);
//! ```

pub mod author;
pub mod database;
pub mod options;
pub mod tiers;

pub use author::Author;
pub use database::Database;
pub use options::{Config, OutputKind};
pub use tiers::TierList;
