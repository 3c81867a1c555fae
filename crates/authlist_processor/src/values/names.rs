/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Name helpers.
//!
//! Names are stored as whitespace separated words where an underscore
//! marks a space inside a single word, e.g. `Maria_de_la Cruz`.

/// Initials of a name: the first character of every word, with
/// underscores treated as word breaks.
///
/// ```
/// use authlist_processor::values::initials;
/// assert_eq!(initials("Jane_Q_Doe"), "JQD");
/// assert_eq!(initials("Jane Q. Doe"), "JQD");
/// ```
pub fn initials(name: &str) -> String {
    name.replace('_', " ")
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Join items into an English list: `A`, `A and B`, `A, B and C`.
/// No serial comma.
pub fn comma_and<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [rest @ .., last] => {
            let rest: Vec<&str> = rest.iter().map(|s| s.as_ref()).collect();
            format!("{} and {}", rest.join(", "), last.as_ref())
        }
    }
}

/// Display form of a name with every space (literal or underscore)
/// replaced by `separator`.
pub fn join_words(name: &str, separator: &str) -> String {
    name.replace('_', " ").replace(' ', separator)
}
