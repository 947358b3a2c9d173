// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use run_segmenter_data::Script;

/// Options for [`RunSegmenter`](crate::RunSegmenter) and
/// [`ScriptSegmenter`](crate::ScriptSegmenter).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct SegmenterOptions {
    /// The script given to text that contains no codepoint with a real script at all,
    /// e.g. a lone space or a string of emoji.
    ///
    /// Defaults to [`Script::Common`]. Shapers that need a concrete script for such text usually
    /// want [`Script::Latin`] here.
    pub fallback_script: Script,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            fallback_script: Script::Common,
        }
    }
}

impl SegmenterOptions {
    /// Returns these options with the fallback script replaced.
    #[must_use]
    pub fn with_fallback_script(mut self, script: Script) -> Self {
        self.fallback_script = script;
        self
    }

    /// Returns these options with the fallback script set from an ISO 15924 code such as
    /// `"Latn"`, or a script name such as `"Latin"`.
    #[cfg(feature = "compiled_data")]
    pub fn with_fallback_script_name(
        self,
        name: &str,
    ) -> Result<Self, run_segmenter_data::ParseScriptError> {
        let script = run_segmenter_data::parse_script(name)?;
        Ok(self.with_fallback_script(script))
    }
}
