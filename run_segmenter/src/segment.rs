// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

use run_segmenter_data::Script;

/// Whether a run is rendered with plain text glyphs or with color emoji glyphs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PresentationStyle {
    /// Plain text presentation.
    #[default]
    Text,
    /// Emoji (color glyph) presentation.
    Emoji,
}

impl PresentationStyle {
    /// Returns `true` for [`PresentationStyle::Emoji`].
    #[inline(always)]
    pub fn is_emoji(self) -> bool {
        self == Self::Emoji
    }
}

impl fmt::Display for PresentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("Text"),
            Self::Emoji => f.write_str("Emoji"),
        }
    }
}

/// A maximal range of codepoints sharing one script and one presentation style.
///
/// Offsets are indices into the codepoint slice the segmenter was created with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Index of the first codepoint of the segment.
    pub start: usize,
    /// Index one past the last codepoint of the segment.
    pub end: usize,
    /// The script the segment has been resolved to.
    pub script: Script,
    /// The presentation style of the segment.
    pub presentation_style: PresentationStyle,
}

impl Segment {
    /// Returns the codepoint range covered by the segment.
    #[inline(always)]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the number of codepoints in the segment. This is never zero.
    #[expect(
        clippy::len_without_is_empty,
        reason = "segments are never empty, so an `is_empty` method would always return `false`."
    )]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

#[cfg(feature = "compiled_data")]
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}..{}, {}, {})",
            self.start,
            self.end,
            run_segmenter_data::script_short_name(self.script),
            self.presentation_style
        )
    }
}

/// A run produced by [`ScriptSegmenter`](crate::ScriptSegmenter).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScriptRun {
    /// Index of the first codepoint of the run.
    pub start: usize,
    /// Index one past the last codepoint of the run.
    pub end: usize,
    /// The resolved script of the run.
    pub script: Script,
}

/// A run produced by [`EmojiSegmenter`](crate::EmojiSegmenter).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmojiRun {
    /// Index of the first codepoint of the run.
    pub start: usize,
    /// Index one past the last codepoint of the run.
    pub end: usize,
    /// The presentation style of the run.
    pub presentation_style: PresentationStyle,
}
