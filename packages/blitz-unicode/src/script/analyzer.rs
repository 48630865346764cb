//! Per-codepoint script assignment

use super::types::Script;
use crate::error::PreconditionError;
use crate::provider::UnicodeDataProvider;

/// Assigns a `Script` to every codepoint of a buffer.
///
/// Codepoints whose Script_Extensions name exactly one script resolve to
/// that script. Everything else keeps its Script property value, including
/// Common and Inherited codepoints shared between several scripts. Merging
/// those into neighbouring runs belongs to a run itemizer, not here.
#[derive(Debug, Clone, Copy)]
pub struct ScriptAnalyzer<'a> {
    data: &'a UnicodeDataProvider,
}

impl<'a> ScriptAnalyzer<'a> {
    pub fn new(data: &'a UnicodeDataProvider) -> Self {
        Self { data }
    }

    /// Script of a single codepoint.
    #[inline]
    pub fn script_of(&self, cp: u32) -> Script {
        match self.data.script_extensions(cp) {
            [single] => *single,
            _ => self.data.script(cp),
        }
    }

    /// Fill `out[i]` with the script of `codepoints[i]`.
    pub fn analyze(&self, codepoints: &[u32], out: &mut [Script]) -> Result<(), PreconditionError> {
        PreconditionError::check_len(codepoints.len(), out.len())?;
        for (slot, &cp) in out.iter_mut().zip(codepoints) {
            *slot = self.script_of(cp);
        }
        Ok(())
    }

    /// Allocating variant of [`ScriptAnalyzer::analyze`].
    pub fn analyze_to_vec(&self, codepoints: &[u32]) -> Vec<Script> {
        codepoints.iter().map(|&cp| self.script_of(cp)).collect()
    }
}
