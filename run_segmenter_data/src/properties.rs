// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::BitOr;

/// Emoji related Unicode properties of a single codepoint.
///
/// These are the binary properties from `emoji-data.txt` plus `Regional_Indicator`, packed into a
/// single byte.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct EmojiProperties(u8);

impl EmojiProperties {
    const EMOJI_SHIFT: u8 = 0;
    const EMOJI_PRESENTATION_SHIFT: u8 = 1;
    const EMOJI_MODIFIER_SHIFT: u8 = 2;
    const EMOJI_MODIFIER_BASE_SHIFT: u8 = 3;
    const EMOJI_COMPONENT_SHIFT: u8 = 4;
    const EXTENDED_PICTOGRAPHIC_SHIFT: u8 = 5;
    const REGIONAL_INDICATOR_SHIFT: u8 = 6;

    /// No emoji properties at all.
    pub const NONE: Self = Self(0);
    /// `Emoji=Yes`.
    pub const EMOJI: Self = Self(1 << Self::EMOJI_SHIFT);
    /// `Emoji_Presentation=Yes`: rendered as emoji unless a text selector follows.
    pub const EMOJI_PRESENTATION: Self = Self(1 << Self::EMOJI_PRESENTATION_SHIFT);
    /// `Emoji_Modifier=Yes` (the skin tone modifiers).
    pub const EMOJI_MODIFIER: Self = Self(1 << Self::EMOJI_MODIFIER_SHIFT);
    /// `Emoji_Modifier_Base=Yes`.
    pub const EMOJI_MODIFIER_BASE: Self = Self(1 << Self::EMOJI_MODIFIER_BASE_SHIFT);
    /// `Emoji_Component=Yes`.
    pub const EMOJI_COMPONENT: Self = Self(1 << Self::EMOJI_COMPONENT_SHIFT);
    /// `Extended_Pictographic=Yes`.
    pub const EXTENDED_PICTOGRAPHIC: Self = Self(1 << Self::EXTENDED_PICTOGRAPHIC_SHIFT);
    /// `Regional_Indicator=Yes`.
    pub const REGIONAL_INDICATOR: Self = Self(1 << Self::REGIONAL_INDICATOR_SHIFT);

    /// Creates a new [`EmojiProperties`] from the given properties.
    pub const fn new(
        is_emoji: bool,
        is_emoji_presentation: bool,
        is_emoji_modifier: bool,
        is_emoji_modifier_base: bool,
        is_emoji_component: bool,
        is_extended_pictographic: bool,
        is_regional_indicator: bool,
    ) -> Self {
        Self(
            (is_emoji as u8) << Self::EMOJI_SHIFT
                | (is_emoji_presentation as u8) << Self::EMOJI_PRESENTATION_SHIFT
                | (is_emoji_modifier as u8) << Self::EMOJI_MODIFIER_SHIFT
                | (is_emoji_modifier_base as u8) << Self::EMOJI_MODIFIER_BASE_SHIFT
                | (is_emoji_component as u8) << Self::EMOJI_COMPONENT_SHIFT
                | (is_extended_pictographic as u8) << Self::EXTENDED_PICTOGRAPHIC_SHIFT
                | (is_regional_indicator as u8) << Self::REGIONAL_INDICATOR_SHIFT,
        )
    }

    /// Returns the union of both property sets.
    #[must_use]
    #[inline(always)]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if every property set in `other` is also set in `self`.
    #[inline(always)]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no property is set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    const fn bit(self, shift: u8) -> bool {
        (self.0 >> shift) & 1 != 0
    }

    /// Returns whether the codepoint is an emoji.
    #[inline(always)]
    pub const fn is_emoji(self) -> bool {
        self.bit(Self::EMOJI_SHIFT)
    }

    /// Returns whether the codepoint defaults to emoji presentation.
    #[inline(always)]
    pub const fn is_emoji_presentation(self) -> bool {
        self.bit(Self::EMOJI_PRESENTATION_SHIFT)
    }

    /// Returns whether the codepoint is a skin tone modifier.
    #[inline(always)]
    pub const fn is_emoji_modifier(self) -> bool {
        self.bit(Self::EMOJI_MODIFIER_SHIFT)
    }

    /// Returns whether the codepoint accepts a skin tone modifier.
    #[inline(always)]
    pub const fn is_emoji_modifier_base(self) -> bool {
        self.bit(Self::EMOJI_MODIFIER_BASE_SHIFT)
    }

    /// Returns whether the codepoint is an emoji component.
    #[inline(always)]
    pub const fn is_emoji_component(self) -> bool {
        self.bit(Self::EMOJI_COMPONENT_SHIFT)
    }

    /// Returns whether the codepoint is an extended pictographic.
    #[inline(always)]
    pub const fn is_extended_pictographic(self) -> bool {
        self.bit(Self::EXTENDED_PICTOGRAPHIC_SHIFT)
    }

    /// Returns whether the codepoint is a regional indicator.
    #[inline(always)]
    pub const fn is_regional_indicator(self) -> bool {
        self.bit(Self::REGIONAL_INDICATOR_SHIFT)
    }
}

impl BitOr for EmojiProperties {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl From<EmojiProperties> for u8 {
    fn from(value: EmojiProperties) -> Self {
        value.0
    }
}

impl fmt::Debug for EmojiProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(EmojiProperties, &str); 7] = [
            (EmojiProperties::EMOJI, "Emoji"),
            (EmojiProperties::EMOJI_PRESENTATION, "Emoji_Presentation"),
            (EmojiProperties::EMOJI_MODIFIER, "Emoji_Modifier"),
            (EmojiProperties::EMOJI_MODIFIER_BASE, "Emoji_Modifier_Base"),
            (EmojiProperties::EMOJI_COMPONENT, "Emoji_Component"),
            (EmojiProperties::EXTENDED_PICTOGRAPHIC, "Extended_Pictographic"),
            (EmojiProperties::REGIONAL_INDICATOR, "Regional_Indicator"),
        ];
        let mut set = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::EmojiProperties;

    #[test]
    fn new_matches_flag_constants() {
        let props = EmojiProperties::new(true, false, false, true, false, true, false);
        assert_eq!(
            props,
            EmojiProperties::EMOJI
                | EmojiProperties::EMOJI_MODIFIER_BASE
                | EmojiProperties::EXTENDED_PICTOGRAPHIC
        );
        assert!(props.is_emoji());
        assert!(!props.is_emoji_presentation());
        assert!(props.is_emoji_modifier_base());
        assert!(!props.is_regional_indicator());
    }

    #[test]
    fn none_is_empty() {
        assert!(EmojiProperties::NONE.is_empty());
        assert_eq!(EmojiProperties::default(), EmojiProperties::NONE);
        assert!(!EmojiProperties::REGIONAL_INDICATOR.is_empty());
    }
}
