/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use authlist_core::{Database, TierList};
use tracing::debug;

use crate::ProcessorError;

/// Load an author database from a file given its path.
/// Supports JSON, and YAML for `.yaml`/`.yml` files.
pub fn load_database(path: &Path) -> Result<Database, ProcessorError> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let db = parse_database(&content, ext)?;
    debug!(
        path = %path.display(),
        authors = db.authors.len(),
        institutions = db.institutions.len(),
        acknowledgements = db.acknowledgements.len(),
        "loaded database"
    );
    Ok(db)
}

/// Parse database text. `ext` selects the syntax as for [`load_database`].
pub fn parse_database(content: &str, ext: &str) -> Result<Database, ProcessorError> {
    match ext {
        "yaml" | "yml" => serde_yaml::from_str(content)
            .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string())),
        _ => serde_json::from_str(content)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string())),
    }
}

/// Load a tier file: one tier per line, comma separated author ids.
pub fn load_tiers(path: &Path) -> Result<TierList, ProcessorError> {
    let content = fs::read_to_string(path)?;
    let tiers = match content.parse::<TierList>() {
        Ok(tiers) => tiers,
        Err(never) => match never {},
    };
    debug!(path = %path.display(), tiers = tiers.len(), "loaded tiers");
    Ok(tiers)
}
