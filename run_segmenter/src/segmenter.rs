// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;

use run_segmenter_data::Classifier;
#[cfg(feature = "compiled_data")]
use run_segmenter_data::UnicodeClassifier;

use crate::{EmojiRun, EmojiSegmenter, ScriptRun, ScriptSegmenter, Segment, SegmenterOptions};

/// Splits text into maximal runs of uniform script and presentation style.
///
/// The segmenter is a cursor over one text: each call to [`consume`](Self::consume) yields the
/// next [`Segment`] until the text is exhausted, after which it keeps returning `None`. The
/// segments returned cover the text from start to end without gaps or overlaps, and no two
/// adjacent segments share both script and presentation style.
///
/// It is also an [`Iterator`] over the same segments, so callers that only need a prefix of the
/// runs do no work for the rest of the text.
#[derive(Debug)]
pub struct RunSegmenter<'a, C: ?Sized> {
    len: usize,
    offset: usize,
    scripts: ScriptSegmenter<'a, C>,
    emoji: EmojiSegmenter<'a, C>,
    script_run: Option<ScriptRun>,
    emoji_run: Option<EmojiRun>,
}

#[cfg(feature = "compiled_data")]
impl<'a> RunSegmenter<'a, UnicodeClassifier> {
    /// Creates a segmenter over `text` using the compiled Unicode data and default options.
    pub fn new(text: &'a [char]) -> Self {
        Self::with_options(text, SegmenterOptions::default())
    }

    /// Creates a segmenter over `text` using the compiled Unicode data.
    pub fn with_options(text: &'a [char], options: SegmenterOptions) -> Self {
        Self::with_classifier(text, &UnicodeClassifier, options)
    }
}

impl<'a, C: Classifier + ?Sized> RunSegmenter<'a, C> {
    /// Creates a segmenter over `text` that takes its Unicode data from `classifier`.
    pub fn with_classifier(text: &'a [char], classifier: &'a C, options: SegmenterOptions) -> Self {
        Self {
            len: text.len(),
            offset: 0,
            scripts: ScriptSegmenter::new(text, classifier, options),
            emoji: EmojiSegmenter::new(text, classifier),
            script_run: None,
            emoji_run: None,
        }
    }

    /// Returns the index up to which segments have been produced.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` once every segment has been produced.
    pub fn is_finished(&self) -> bool {
        self.offset >= self.len
    }

    /// Produces the next segment, or `None` once the whole text has been segmented.
    pub fn consume(&mut self) -> Option<Segment> {
        if self.is_finished() {
            return None;
        }

        let script_run = match self.script_run {
            Some(run) if run.end > self.offset => run,
            _ => *self.script_run.insert(self.scripts.next()?),
        };
        let emoji_run = match self.emoji_run {
            Some(run) if run.end > self.offset => run,
            _ => *self.emoji_run.insert(self.emoji.next()?),
        };

        let segment = Segment {
            start: self.offset,
            end: script_run.end.min(emoji_run.end),
            script: script_run.script,
            presentation_style: emoji_run.presentation_style,
        };
        debug_assert!(
            segment.start < segment.end,
            "segments always make progress"
        );
        log::trace!(
            "segment {}..{}: {:?} {}",
            segment.start,
            segment.end,
            segment.script,
            segment.presentation_style
        );
        self.offset = segment.end;
        Some(segment)
    }
}

impl<C: Classifier + ?Sized> Iterator for RunSegmenter<'_, C> {
    type Item = Segment;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.consume()
    }
}

impl<C: Classifier + ?Sized> FusedIterator for RunSegmenter<'_, C> {}
