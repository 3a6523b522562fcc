// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Small formatting helpers for user-facing text.
//!
//! Textfmt provides three independent, total formatters: [`truncate`] to fit
//! text into a character budget, [`capitalize`] to upper-case the first
//! character of text, and [`format_file_size`] to render byte counts with
//! binary units. None of them ever fail. Absent or nonsensical input always
//! collapses into a safe default ("" or "0 B").
//!
//! Default formatting options can be supplied through a settings file, see
//! [`config`] for its layout.

pub mod config;
pub mod path;
pub mod size;
pub mod text;

pub use config::FormatSettings;
pub use size::{format_file_size, SizeUnit};
pub use text::{capitalize, truncate};
