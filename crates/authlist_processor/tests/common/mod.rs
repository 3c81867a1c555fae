/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use authlist_processor::{io::parse_database, Database, Processor, TierList};

/// The database used by the end-to-end example.
pub const MINIMAL_DB: &str = r#"{
    "authors": {"a1": ["Jane Doe", "", ["i1"], ["k1"]]},
    "institutions": {"i1": "Uni X"},
    "acknowledgements": {"k1": "We {thank} {author}, who {is} great"}
}"#;

/// A small collaboration spread over two tiers.
pub const COLLABORATION_DB: &str = r#"{
    "authors": {
        "lead":   ["Maria_de_la Cruz", "0000-0001-0000-0001", ["ias", "cern"], ["erc", "hpc"]],
        "zhang":  ["Wei Zhang", "", ["cern"], ["hpc"]],
        "adams":  ["Peter J Adams", "", ["mit"], ["nsf", "hpc"]],
        "baker":  ["Ruth Baker", "0000-0003-0000-0003", ["mit", "ias"], ["erc"]]
    },
    "institutions": {
        "ias":  "Institute for Advanced Study, Princeton, NJ, USA",
        "cern": "CERN, Geneva, Switzerland",
        "mit":  "MIT, Cambridge, MA, USA"
    },
    "acknowledgements": {
        "erc": "{author} {ackn} funding from the ERC",
        "hpc": "We {thank} the computing centre for resources used by {author}",
        "nsf": "{author} {is} supported by the NSF",
        "unused": "Nobody lists this {author}"
    }
}"#;

pub fn load(json: &str) -> Database {
    parse_database(json, "json").unwrap()
}

pub fn tiers(text: &str) -> TierList {
    text.parse().unwrap()
}

pub fn processor(json: &str, tier_text: &str) -> Processor {
    Processor::new(load(json), tiers(tier_text))
}
