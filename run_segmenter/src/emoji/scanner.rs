// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A longest-match recognizer for emoji sequences.
//!
//! Each codepoint is reduced to an [`EmojiCategory`]. [`ScanState::next`] is a pure transition
//! function over those categories; [`scan_cluster`] runs it from a starting position until no
//! transition applies and returns the longest accepted prefix.

use run_segmenter_data::{Classifier, EmojiProperties};

use crate::PresentationStyle;

const ZERO_WIDTH_JOINER: char = '\u{200D}';
const TEXT_VARIATION_SELECTOR: char = '\u{FE0E}';
const EMOJI_VARIATION_SELECTOR: char = '\u{FE0F}';
const COMBINING_ENCLOSING_KEYCAP: char = '\u{20E3}';
const COMBINING_ENCLOSING_CIRCLE_BACKSLASH: char = '\u{20E0}';
const WAVING_BLACK_FLAG: char = '\u{1F3F4}';
const CANCEL_TAG: char = '\u{E007F}';

/// The role a codepoint can play in an emoji sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum EmojiCategory {
    /// Not part of any emoji sequence.
    Other,
    /// An emoji, with its default presentation.
    Pictograph(PresentationStyle),
    /// An emoji that accepts a skin tone modifier, with its default presentation.
    ModifierBase(PresentationStyle),
    /// A skin tone modifier.
    Modifier,
    RegionalIndicator,
    /// `0`-`9`, `#` and `*`.
    KeycapBase,
    /// U+20E3 COMBINING ENCLOSING KEYCAP.
    Keycap,
    /// U+20E0 COMBINING ENCLOSING CIRCLE BACKSLASH.
    CircleBackslash,
    ZeroWidthJoiner,
    /// U+FE0E VARIATION SELECTOR-15.
    TextSelector,
    /// U+FE0F VARIATION SELECTOR-16.
    EmojiSelector,
    /// U+1F3F4 WAVING BLACK FLAG, which starts subdivision flag sequences.
    TagBase,
    /// A tag digit or tag small letter.
    TagSpec,
    /// U+E007F CANCEL TAG.
    CancelTag,
}

impl EmojiCategory {
    pub(crate) fn of(ch: char, props: EmojiProperties) -> Self {
        match ch {
            ZERO_WIDTH_JOINER => return Self::ZeroWidthJoiner,
            TEXT_VARIATION_SELECTOR => return Self::TextSelector,
            EMOJI_VARIATION_SELECTOR => return Self::EmojiSelector,
            COMBINING_ENCLOSING_KEYCAP => return Self::Keycap,
            COMBINING_ENCLOSING_CIRCLE_BACKSLASH => return Self::CircleBackslash,
            WAVING_BLACK_FLAG => return Self::TagBase,
            CANCEL_TAG => return Self::CancelTag,
            '\u{E0030}'..='\u{E0039}' | '\u{E0061}'..='\u{E007A}' => return Self::TagSpec,
            '0'..='9' | '#' | '*' => return Self::KeycapBase,
            _ => {}
        }
        let presentation = if props.is_emoji_presentation() {
            PresentationStyle::Emoji
        } else {
            PresentationStyle::Text
        };
        if props.is_emoji_modifier_base() {
            Self::ModifierBase(presentation)
        } else if props.is_emoji_modifier() {
            Self::Modifier
        } else if props.is_regional_indicator() {
            Self::RegionalIndicator
        } else if props.is_emoji() {
            Self::Pictograph(presentation)
        } else {
            Self::Other
        }
    }
}

/// Recognizer state after consuming a prefix of a cluster.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ScanState {
    Start,
    /// An emoji that may still take a selector, modifier or joiner.
    ///
    /// `joined` is set when the emoji follows a zero width joiner, which makes the whole
    /// sequence emoji regardless of the default presentation.
    Base {
        presentation: PresentationStyle,
        modifier_base: bool,
        joined: bool,
    },
    /// An emoji element with settled emoji presentation that can still be joined.
    Qualified,
    /// A zero width joiner waiting for the next element.
    Joiner,
    KeycapBase,
    /// A keycap base followed by VS16.
    KeycapSelector,
    /// A lone regional indicator.
    Indicator,
    TagBase,
    /// Inside a tag sequence, waiting for the cancel tag.
    Tag,
    /// A complete sequence that cannot be extended.
    Done(PresentationStyle),
}

impl ScanState {
    /// Returns the state after consuming a codepoint of `category`, or `None` if the sequence
    /// cannot be extended by it.
    pub(crate) fn next(self, category: EmojiCategory) -> Option<Self> {
        use EmojiCategory as C;
        use PresentationStyle::{Emoji, Text};

        let next = match (self, category) {
            (Self::Start, C::Pictograph(presentation)) => Self::Base {
                presentation,
                modifier_base: false,
                joined: false,
            },
            (Self::Start, C::ModifierBase(presentation)) => Self::Base {
                presentation,
                modifier_base: true,
                joined: false,
            },
            (Self::Start, C::Modifier) => Self::Base {
                presentation: Emoji,
                modifier_base: false,
                joined: false,
            },
            (Self::Start, C::RegionalIndicator) => Self::Indicator,
            (Self::Start, C::KeycapBase) => Self::KeycapBase,
            (Self::Start, C::TagBase) => Self::TagBase,
            (Self::Start, _) => Self::Done(Text),

            (Self::Base { .. }, C::EmojiSelector) => Self::Qualified,
            (Self::Base { joined: true, .. }, C::TextSelector) => Self::Qualified,
            (Self::Base { joined: false, .. }, C::TextSelector) => Self::Done(Text),
            (
                Self::Base {
                    modifier_base: true,
                    ..
                },
                C::Modifier,
            ) => Self::Qualified,
            (Self::Base { .. } | Self::Qualified, C::ZeroWidthJoiner) => Self::Joiner,
            (Self::Base { .. } | Self::Qualified, C::CircleBackslash) => Self::Done(Emoji),

            (Self::Joiner, C::Pictograph(_) | C::Modifier | C::TagBase) => Self::Base {
                presentation: Emoji,
                modifier_base: false,
                joined: true,
            },
            (Self::Joiner, C::ModifierBase(_)) => Self::Base {
                presentation: Emoji,
                modifier_base: true,
                joined: true,
            },

            (Self::KeycapBase, C::EmojiSelector) => Self::KeycapSelector,
            (Self::KeycapBase, C::TextSelector) => Self::Done(Text),
            (Self::KeycapBase | Self::KeycapSelector, C::Keycap) => Self::Done(Emoji),

            (Self::Indicator, C::RegionalIndicator) => Self::Done(Emoji),
            (Self::Indicator | Self::TagBase | Self::Tag, C::TagSpec) => Self::Tag,
            (Self::Tag, C::CancelTag) => Self::Done(Emoji),
            // Apart from tags, the black flag behaves like any other emoji (e.g. the pirate flag).
            (Self::TagBase, category) => {
                return Self::Base {
                    presentation: Emoji,
                    modifier_base: false,
                    joined: false,
                }
                .next(category);
            }

            _ => return None,
        };
        Some(next)
    }

    /// Returns the presentation style if a cluster may end in this state.
    pub(crate) fn accepts(self) -> Option<PresentationStyle> {
        match self {
            Self::Start | Self::Joiner | Self::Tag => None,
            Self::Base {
                presentation,
                joined,
                ..
            } => Some(if joined {
                PresentationStyle::Emoji
            } else {
                presentation
            }),
            Self::Qualified | Self::KeycapSelector | Self::TagBase => {
                Some(PresentationStyle::Emoji)
            }
            Self::KeycapBase | Self::Indicator => Some(PresentationStyle::Text),
            Self::Done(presentation) => Some(presentation),
        }
    }
}

/// Recognizes the longest cluster starting at `start`, which must be in bounds.
///
/// Returns the end of the cluster and its presentation style. Every cluster covers at least
/// one codepoint; trailing codepoints that were read ahead but not accepted (such as a joiner
/// with nothing to join) are left for the next cluster.
pub(crate) fn scan_cluster<C: Classifier + ?Sized>(
    text: &[char],
    classifier: &C,
    start: usize,
) -> (usize, PresentationStyle) {
    let mut state = ScanState::Start;
    let mut accepted = (start + 1, PresentationStyle::Text);
    for (index, &ch) in text.iter().enumerate().skip(start) {
        let category = EmojiCategory::of(ch, classifier.emoji_properties(ch));
        let Some(next) = state.next(category) else {
            break;
        };
        state = next;
        if let Some(presentation) = state.accepts() {
            accepted = (index + 1, presentation);
        }
    }
    accepted
}
