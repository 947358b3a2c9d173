// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod samples;

pub(crate) use samples::SAMPLES;

use run_segmenter::{PresentationStyle, RunSegmenter, Script, Segment};

pub(crate) fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Concatenates the parts of `expected` and checks that segmentation yields exactly one segment
/// per part, with the given script and presentation style.
pub(crate) fn assert_runs(expected: &[(&str, Script, PresentationStyle)]) {
    let mut text = Vec::new();
    let mut expected_segments = Vec::new();
    for &(part, script, presentation_style) in expected {
        let start = text.len();
        text.extend(part.chars());
        expected_segments.push(Segment {
            start,
            end: text.len(),
            script,
            presentation_style,
        });
    }

    let mut segmenter = RunSegmenter::new(&text);
    for (index, expected) in expected_segments.iter().enumerate() {
        let actual = segmenter.consume();
        assert_eq!(
            actual,
            Some(*expected),
            "run segmentation for part {index} ({:?}) should be {expected}",
            &text[expected.range()]
        );
    }
    assert_eq!(segmenter.consume(), None, "unexpected trailing segment");
}

/// Asserts that `segments` partition `0..len` into non-empty, maximal runs.
pub(crate) fn assert_well_formed(len: usize, segments: &[Segment]) {
    let mut expected_start = 0;
    for (index, segment) in segments.iter().enumerate() {
        assert_eq!(
            segment.start, expected_start,
            "gap or overlap before segment {index} ({segment})"
        );
        assert!(segment.start < segment.end, "empty segment {segment}");
        expected_start = segment.end;
    }
    assert_eq!(expected_start, len, "segments do not cover the text");
    for pair in segments.windows(2) {
        assert!(
            pair[0].script != pair[1].script
                || pair[0].presentation_style != pair[1].presentation_style,
            "adjacent segments {} and {} should have been merged",
            pair[0],
            pair[1]
        );
    }
}
