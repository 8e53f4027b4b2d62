use std::collections::HashMap;

/// Occurrence counts per position key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RepetitionTable {
    counts: HashMap<String, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, key: &str) -> u32 {
        let next = self.get(key).saturating_add(1);
        self.counts.insert(key.to_string(), next);
        next
    }

    pub(crate) fn clear(&mut self) {
        self.counts.clear();
    }
}
