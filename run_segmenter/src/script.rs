// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;

use run_segmenter_data::{Classifier, Script, is_real_script};

use crate::{ScriptRun, SegmenterOptions};

/// Splits text into runs of a single resolved script.
///
/// A boundary only ever occurs where a codepoint with a real script differs from the script of
/// the current run. Codepoints whose script is `Common`, `Inherited` or `Unknown` never start a
/// run: they continue whichever run precedes them. Weak codepoints at the very start of the text
/// take the first real script that follows them, or
/// [`SegmenterOptions::fallback_script`] if there is none.
#[derive(Debug)]
pub struct ScriptSegmenter<'a, C: ?Sized> {
    text: &'a [char],
    classifier: &'a C,
    fallback_script: Script,
    offset: usize,
    /// Script of the run starting at `offset`, once a boundary has been found.
    next_script: Option<Script>,
}

impl<'a, C: Classifier + ?Sized> ScriptSegmenter<'a, C> {
    /// Creates a segmenter over `text`.
    pub fn new(text: &'a [char], classifier: &'a C, options: SegmenterOptions) -> Self {
        Self {
            text,
            classifier,
            fallback_script: options.fallback_script,
            offset: 0,
            next_script: None,
        }
    }

    /// Returns the first real script at or after `start` along with its position.
    fn lookahead(&self, start: usize) -> Option<(usize, Script)> {
        self.text[start..]
            .iter()
            .map(|&ch| self.classifier.script(ch))
            .enumerate()
            .find(|&(_, script)| is_real_script(script))
            .map(|(index, script)| (start + index, script))
    }
}

impl<C: Classifier + ?Sized> Iterator for ScriptSegmenter<'_, C> {
    type Item = ScriptRun;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.offset;
        if start >= self.text.len() {
            return None;
        }

        let (script, mut end) = match self.next_script.take() {
            // The codepoint at `start` carries `script`.
            Some(script) => (script, start + 1),
            None => match self.lookahead(start) {
                Some((index, script)) => (script, index + 1),
                None => {
                    self.offset = self.text.len();
                    return Some(ScriptRun {
                        start,
                        end: self.offset,
                        script: self.fallback_script,
                    });
                }
            },
        };

        while let Some(&ch) = self.text.get(end) {
            let next = self.classifier.script(ch);
            if is_real_script(next) && next != script {
                self.next_script = Some(next);
                break;
            }
            end += 1;
        }

        log::trace!("script run {start}..{end}: {script:?}");
        self.offset = end;
        Some(ScriptRun { start, end, script })
    }
}

impl<C: Classifier + ?Sized> FusedIterator for ScriptSegmenter<'_, C> {}
