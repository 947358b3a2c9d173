// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use icu_properties::props::Script;
use icu_properties::{PropertyNamesShort, PropertyParser};

/// Returns the ISO 15924 code of `script` (e.g. `Latn`), or `Zzzz` if the script has no name.
pub fn script_short_name(script: Script) -> &'static str {
    PropertyNamesShort::<Script>::new()
        .get(script)
        .unwrap_or("Zzzz")
}

/// Parses a script from its ISO 15924 code (`Latn`) or its Unicode property value name
/// (`Latin`).
pub fn parse_script(name: &str) -> Result<Script, ParseScriptError> {
    if name.is_empty() {
        return Err(ParseScriptError::Empty);
    }
    PropertyParser::<Script>::new()
        .get_strict(name)
        .ok_or(ParseScriptError::UnknownScript)
}

/// An error returned from [`parse_script`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseScriptError {
    /// The input was empty.
    Empty,
    /// The input did not name a Unicode script.
    UnknownScript,
}

impl fmt::Display for ParseScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty script name"),
            Self::UnknownScript => f.write_str("unknown script name"),
        }
    }
}

impl core::error::Error for ParseScriptError {}
