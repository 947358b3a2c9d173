// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::{Classifier, EmojiProperties, PresentationStyle, Script, Segment};

/// A tiny hand written stand-in for the Unicode data.
///
/// Only the characters used by the unit tests are classified; everything else is `Unknown`
/// with no emoji properties, the same as an unassigned codepoint.
#[derive(Debug, Default)]
pub(crate) struct TestClassifier;

const PICTOGRAPH: EmojiProperties = EmojiProperties::EMOJI.union(EmojiProperties::EXTENDED_PICTOGRAPHIC);
const PRESENTATION: EmojiProperties = PICTOGRAPH.union(EmojiProperties::EMOJI_PRESENTATION);

impl Classifier for TestClassifier {
    fn script(&self, ch: char) -> Script {
        match ch {
            'a'..='z' | 'A'..='Z' => Script::Latin,
            'α'..='ω' => Script::Greek,
            'а'..='я' => Script::Cyrillic,
            '\u{300}'..='\u{36F}' | '\u{200D}' | '\u{FE0E}' | '\u{FE0F}' => Script::Inherited,
            ' ' | '.' | ',' | '!' | '?' => Script::Common,
            _ if !self.emoji_properties(ch).is_empty() => Script::Common,
            _ => Script::Unknown,
        }
    }

    fn emoji_properties(&self, ch: char) -> EmojiProperties {
        match ch {
            '😀' | '🌱' | '🏴' => PRESENTATION,
            '☺' | '❤' | '☦' => PICTOGRAPH,
            '✋' | '👩' | '👧' => PRESENTATION | EmojiProperties::EMOJI_MODIFIER_BASE,
            '✌' | '⛹' => PICTOGRAPH | EmojiProperties::EMOJI_MODIFIER_BASE,
            '\u{1F3FB}'..='\u{1F3FF}' => {
                EmojiProperties::EMOJI
                    | EmojiProperties::EMOJI_PRESENTATION
                    | EmojiProperties::EMOJI_MODIFIER
                    | EmojiProperties::EMOJI_COMPONENT
            }
            '🇦'..='🇿' => {
                EmojiProperties::EMOJI
                    | EmojiProperties::EMOJI_PRESENTATION
                    | EmojiProperties::EMOJI_COMPONENT
                    | EmojiProperties::REGIONAL_INDICATOR
            }
            '0'..='9' | '#' | '*' => EmojiProperties::EMOJI | EmojiProperties::EMOJI_COMPONENT,
            '\u{200D}' | '\u{20E3}' | '\u{FE0F}' | '\u{E0020}'..='\u{E007F}' => {
                EmojiProperties::EMOJI_COMPONENT
            }
            _ => EmojiProperties::NONE,
        }
    }
}

pub(crate) fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// The tag sequence for England: black flag, `gbeng`, cancel tag.
pub(crate) fn england_flag() -> Vec<char> {
    let mut flag = alloc::vec!['🏴'];
    flag.extend("gbeng".chars().map(|ch| char::from_u32(ch as u32 + 0xE0000).unwrap()));
    flag.push('\u{E007F}');
    flag
}

pub(crate) fn simplify(segments: &[Segment]) -> Vec<(Range<usize>, Script, PresentationStyle)> {
    segments
        .iter()
        .map(|segment| (segment.range(), segment.script, segment.presentation_style))
        .collect()
}

/// Asserts that `segments` partition `0..len` into non-empty, maximal runs.
pub(crate) fn assert_well_formed(len: usize, segments: &[Segment]) {
    let mut expected_start = 0;
    for (index, segment) in segments.iter().enumerate() {
        assert_eq!(segment.start, expected_start, "gap or overlap at segment {index}");
        assert!(segment.start < segment.end, "empty segment {index}");
        expected_start = segment.end;
    }
    assert_eq!(expected_start, len, "segments do not cover the text");
    for pair in segments.windows(2) {
        assert!(
            pair[0].script != pair[1].script
                || pair[0].presentation_style != pair[1].presentation_style,
            "adjacent segments {} and {} should have been merged",
            pair[0].start,
            pair[1].start
        );
    }
}
