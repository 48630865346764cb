//! Script_Extensions lookup table

use crate::script::Script;

/// A codepoint range whose Script_Extensions are stored at
/// `scripts[offset..offset + len]` of the owning table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptExtensionEntry {
    pub start: u32,
    pub end: u32,
    offset: u32,
    len: u8,
}

/// Ranges of codepoints usable in more than one script, backed by one flat
/// pool of script values so lookups hand out borrowed slices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptExtensionTable {
    entries: Vec<ScriptExtensionEntry>,
    pool: Vec<Script>,
}

impl ScriptExtensionTable {
    /// Append a range. Ranges must arrive sorted and disjoint.
    pub(crate) fn push(&mut self, start: u32, end: u32, scripts: &[Script]) {
        let offset = self.pool.len() as u32;
        self.pool.extend_from_slice(scripts);
        self.entries.push(ScriptExtensionEntry {
            start,
            end,
            offset,
            len: scripts.len() as u8,
        });
    }

    /// Script_Extensions of `cp`, empty when the Script value is authoritative.
    pub fn get(&self, cp: u32) -> &[Script] {
        let idx = self.entries.partition_point(|entry| entry.end < cp);
        match self.entries.get(idx) {
            Some(entry) if entry.start <= cp => self.scripts_of(entry),
            _ => &[],
        }
    }

    pub(crate) fn scripts_of(&self, entry: &ScriptExtensionEntry) -> &[Script] {
        let start = entry.offset as usize;
        &self.pool[start..start + entry.len as usize]
    }

    pub fn entries(&self) -> &[ScriptExtensionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_borrowed_script_sets() {
        let mut table = ScriptExtensionTable::default();
        table.push(0x0342, 0x0342, &[Script::Greek]);
        table.push(0x0951, 0x0952, &[Script::Bengali, Script::Devanagari]);

        assert_eq!(table.get(0x0342), &[Script::Greek]);
        assert_eq!(table.get(0x0952), &[Script::Bengali, Script::Devanagari]);
        assert!(table.get(0x0041).is_empty());
        assert!(table.get(0x0953).is_empty());
        assert_eq!(table.len(), 2);
    }
}
