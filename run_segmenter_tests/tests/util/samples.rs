// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Mixed script and emoji text used for whole-pipeline checks.
pub(crate) const SAMPLES: &[&str] = &[
    "",
    " ",
    "Abc.;?Xyz",
    "نص키스의",
    "百家姓ऋषियों🌱🌲🌳🌴百家姓🌱🌲",
    "◌́◌̀◌̈◌̂◌̄◌̊",
    "いろはに.…¡ほへと",
    "👩\u{200D}👩\u{200D}👧\u{200D}👦👩\u{200D}❤\u{FE0F}\u{200D}💋\u{200D}👨abcd👩\u{200D}👩\u{200D}\u{200D}efg",
    "⛹🏻✍🏻✊🏼",
    "աբգαβγԱԲԳ",
    "🏴\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}",
    "☦☪☸✝✡☧☨☩☫☬♰♱✟✠",
    "The quick (\"brown\") fox 🦊 can't jump 32.3 feet, right?",
    "Съешь же ещё этих мягких французских булок, да выпей чаю 🍵",
    "Ξεσκεπάζω τὴν ψυχοφθόρα βδελυγμία",
    "שלום עולם! مرحبا بالعالم 👋🏾",
    "ひらがなカタカナ漢字、ＡＢＣ！",
    "1\u{FE0F}\u{20E3}#\u{20E3}*\u{FE0E}7",
    "🇯🇵🇺🇸🇬",
    "a\u{200D}\u{200D}b\u{FE0F}\u{FE0E}",
    "\u{50000}\u{FFFF}\u{E0001}ab\u{10FFFF}",
    "🏳\u{FE0F}\u{200D}🌈 🏴\u{200D}☠\u{FE0F} 🧑🏽\u{200D}🚀",
    "ก่อนไป 🙏 ສະບາຍດີ ខ្មែរ",
];
