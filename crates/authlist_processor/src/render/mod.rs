/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output formats for the author block.

pub mod format;
pub mod latex;
pub mod plain;

pub use format::OutputFormat;
pub use latex::Latex;
pub use plain::PlainText;
