// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_properties::props::Script;

use crate::EmojiProperties;

#[cfg(feature = "compiled_data")]
use icu_properties::{
    CodePointMapData, CodePointSetData,
    props::{
        Emoji, EmojiComponent, EmojiModifier, EmojiModifierBase, EmojiPresentation,
        ExtendedPictographic, RegionalIndicator,
    },
};

/// Source of the per-codepoint Unicode data used by the segmenters.
///
/// Implementations must be pure: the same codepoint always yields the same answer for the
/// lifetime of the classifier. Codepoints the implementation has no data for should report
/// [`Script::Unknown`] and [`EmojiProperties::NONE`].
pub trait Classifier {
    /// Returns the `Script` property of `ch`.
    fn script(&self, ch: char) -> Script;

    /// Returns the emoji properties of `ch`.
    fn emoji_properties(&self, ch: char) -> EmojiProperties;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    #[inline(always)]
    fn script(&self, ch: char) -> Script {
        (**self).script(ch)
    }

    #[inline(always)]
    fn emoji_properties(&self, ch: char) -> EmojiProperties {
        (**self).emoji_properties(ch)
    }
}

/// A [`Classifier`] backed by the Unicode Character Database compiled into ICU4X.
///
/// Unassigned codepoints are reported as [`Script::Unknown`] with no emoji properties, which is
/// what the database itself specifies for them.
#[cfg(feature = "compiled_data")]
#[derive(Copy, Clone, Debug, Default)]
pub struct UnicodeClassifier;

#[cfg(feature = "compiled_data")]
impl UnicodeClassifier {
    /// Creates a new classifier. This is free; all data is static.
    pub const fn new() -> Self {
        Self
    }
}

#[cfg(feature = "compiled_data")]
impl Classifier for UnicodeClassifier {
    #[inline]
    fn script(&self, ch: char) -> Script {
        CodePointMapData::<Script>::new().get(ch)
    }

    fn emoji_properties(&self, ch: char) -> EmojiProperties {
        EmojiProperties::new(
            CodePointSetData::new::<Emoji>().contains(ch),
            CodePointSetData::new::<EmojiPresentation>().contains(ch),
            CodePointSetData::new::<EmojiModifier>().contains(ch),
            CodePointSetData::new::<EmojiModifierBase>().contains(ch),
            CodePointSetData::new::<EmojiComponent>().contains(ch),
            CodePointSetData::new::<ExtendedPictographic>().contains(ch),
            CodePointSetData::new::<RegionalIndicator>().contains(ch),
        )
    }
}
