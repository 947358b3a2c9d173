// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run segmentation for text shaping.
//!
//! A shaping pipeline needs text broken into runs that can each be handed to one font and one
//! shaper invocation. This crate splits a sequence of codepoints into maximal runs that share a
//! Unicode [`Script`] and a [`PresentationStyle`] (plain text or color emoji).
//!
//! [`RunSegmenter`] drives two detectors over the same text in lockstep:
//!
//! - [`ScriptSegmenter`] finds boundaries between writing systems. Codepoints with a weak script
//!   (`Common`, `Inherited`, `Unknown`) such as punctuation, combining marks and most emoji join
//!   the run they appear in.
//! - [`EmojiSegmenter`] recognizes emoji sequences (ZWJ sequences, skin tone modifiers, flags,
//!   subdivision tags, keycaps and variation selectors) and separates emoji from text
//!   presentation.
//!
//! Unicode data is provided by a [`Classifier`]. With the `compiled_data` feature (enabled by
//! default) the ICU4X data is used via [`UnicodeClassifier`].
//!
//! ## Features
//!
//! - `compiled_data` (enabled by default): Constructors that use [`UnicodeClassifier`] and
//!   [`Display`](core::fmt::Display) for [`Segment`].
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "compiled_data")]
//! # {
//! use run_segmenter::{PresentationStyle, RunSegmenter, Script};
//!
//! let text: Vec<char> = "Hi 👋🏽 there".chars().collect();
//! let runs: Vec<_> = RunSegmenter::new(&text)
//!     .map(|segment| (segment.range(), segment.script, segment.presentation_style))
//!     .collect();
//!
//! assert_eq!(
//!     runs,
//!     [
//!         (0..3, Script::Latin, PresentationStyle::Text),
//!         (3..5, Script::Latin, PresentationStyle::Emoji),
//!         (5..11, Script::Latin, PresentationStyle::Text),
//!     ]
//! );
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

#[cfg(test)]
extern crate alloc;

mod emoji;
mod options;
mod script;
mod segment;
mod segmenter;

#[cfg(test)]
mod tests;

pub use emoji::EmojiSegmenter;
pub use options::SegmenterOptions;
pub use script::ScriptSegmenter;
pub use segment::{EmojiRun, PresentationStyle, ScriptRun, Segment};
pub use segmenter::RunSegmenter;

#[cfg(feature = "compiled_data")]
pub use run_segmenter_data::{ParseScriptError, UnicodeClassifier};
pub use run_segmenter_data::{Classifier, EmojiProperties, Script};
