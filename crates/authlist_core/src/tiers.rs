/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author tiers.
//!
//! A tier file holds one tier per line; each line is a comma separated list
//! of author ids:
//!
//! ```text
//! doe, smith
//! lee, brown, garcia
//! ```
//!
//! Tier order is significant. Order inside a tier is not: the processor
//! re-sorts each tier by last name.

use std::convert::Infallible;
use std::str::FromStr;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TierList(pub Vec<Vec<String>>);

impl TierList {
    pub fn new(tiers: Vec<Vec<String>>) -> Self {
        Self(tiers)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<String>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TierList {
    type Item = &'a Vec<String>;
    type IntoIter = std::slice::Iter<'a, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<Vec<S>> for TierList {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|tier| tier.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

impl FromStr for TierList {
    type Err = Infallible;

    /// Parse a tier file. Blank lines are skipped; ids are trimmed but
    /// otherwise kept verbatim, so `a,,b` yields an empty id that fails
    /// lookup later.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            s.lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| line.split(',').map(|id| id.trim().to_string()).collect())
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let tiers: TierList = "a1\n a2 , a3\n".parse().unwrap();
        assert_eq!(
            tiers,
            TierList::from_iter(vec![vec!["a1"], vec!["a2", "a3"]])
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let tiers: TierList = "a1\n\n   \na2\r\n".parse().unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers.0[1], vec!["a2"]);
    }

    #[test]
    fn test_empty_id_kept() {
        let tiers: TierList = "a1,,a2".parse().unwrap();
        assert_eq!(tiers.0[0], vec!["a1", "", "a2"]);
    }
}
