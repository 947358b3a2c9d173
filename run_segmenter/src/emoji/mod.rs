// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod scanner;

#[cfg(test)]
pub(crate) use scanner::{EmojiCategory, ScanState, scan_cluster};

use core::iter::FusedIterator;

use run_segmenter_data::Classifier;

use crate::{EmojiRun, PresentationStyle};

/// Splits text into runs of text presentation and emoji presentation.
///
/// Emoji sequences are kept whole: zero width joiner sequences, skin tone modifiers, flag pairs,
/// subdivision flags, keycaps and explicit variation selectors never straddle a run boundary.
#[derive(Debug)]
pub struct EmojiSegmenter<'a, C: ?Sized> {
    text: &'a [char],
    classifier: &'a C,
    /// End of the last scanned cluster.
    offset: usize,
    /// A cluster that was scanned but belongs to the following run.
    pending: Option<(usize, usize, PresentationStyle)>,
}

impl<'a, C: Classifier + ?Sized> EmojiSegmenter<'a, C> {
    /// Creates a segmenter over `text`.
    pub fn new(text: &'a [char], classifier: &'a C) -> Self {
        Self {
            text,
            classifier,
            offset: 0,
            pending: None,
        }
    }

    fn scan(&mut self) -> Option<(usize, usize, PresentationStyle)> {
        let start = self.offset;
        if start >= self.text.len() {
            return None;
        }
        let (end, presentation) = scanner::scan_cluster(self.text, self.classifier, start);
        self.offset = end;
        Some((start, end, presentation))
    }
}

impl<C: Classifier + ?Sized> Iterator for EmojiSegmenter<'_, C> {
    type Item = EmojiRun;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, mut end, presentation_style) = match self.pending.take() {
            Some(cluster) => cluster,
            None => self.scan()?,
        };
        while let Some(cluster) = self.scan() {
            if cluster.2 != presentation_style {
                self.pending = Some(cluster);
                break;
            }
            end = cluster.1;
        }
        log::trace!("emoji run {start}..{end}: {presentation_style}");
        Some(EmojiRun {
            start,
            end,
            presentation_style,
        })
    }
}

impl<C: Classifier + ?Sized> FusedIterator for EmojiSegmenter<'_, C> {}
