// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `run_segmenter_data` provides the Unicode character data that the run segmenter consumes.
//!
//! The segmenter only needs two facts about a codepoint: its [`Script`] and its emoji
//! properties. Both are reached through the [`Classifier`] trait so that engines can be driven by
//! the full Unicode data ([`UnicodeClassifier`]) or by small synthetic tables in tests.
//!
//! ## Features
//!
//! - `compiled_data` (enabled by default): Provides [`UnicodeClassifier`], [`script_short_name`]
//!   and [`parse_script`], backed by ICU4X compiled data.
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "compiled_data")]
//! # {
//! use run_segmenter_data::{Classifier, Script, UnicodeClassifier};
//!
//! let classifier = UnicodeClassifier::new();
//! assert_eq!(classifier.script('a'), Script::Latin);
//! assert!(classifier.emoji_properties('😀').is_emoji_presentation());
//! # }
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

mod classifier;
#[cfg(feature = "compiled_data")]
mod names;
mod properties;

pub use classifier::Classifier;
#[cfg(feature = "compiled_data")]
pub use classifier::UnicodeClassifier;
#[cfg(feature = "compiled_data")]
pub use names::{ParseScriptError, parse_script, script_short_name};
pub use properties::EmojiProperties;

pub use icu_properties::props::Script;

/// Returns `true` if `script` identifies a writing system, as opposed to one of the weak
/// values `Common`, `Inherited` and `Unknown`.
#[inline(always)]
pub fn is_real_script(script: Script) -> bool {
    script != Script::Common && script != Script::Unknown && script != Script::Inherited
}
