/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Value helpers shared by the author and acknowledgement blocks.

pub mod names;
pub mod template;

pub use names::{comma_and, initials, join_words};
pub use template::{Template, TemplateValues};
