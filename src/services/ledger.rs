// src/services/ledger.rs
use crate::models::ConversionRecord;

/// The ledger retains this many entries at most.
pub const MAX_ENTRIES: usize = 50;
/// How many entries a reader gets unless it asks for more.
pub const DEFAULT_RECENT: usize = 5;

/// Most-recent-first log of successful conversions, bounded and
/// session-scoped. Nothing here survives a restart.
#[derive(Debug, Default)]
pub struct ConversionLedger {
    entries: Vec<ConversionRecord>,
}

impl ConversionLedger {
    pub fn new() -> Self {
        ConversionLedger::default()
    }

    /// Prepend an entry, discarding the oldest once the cap is exceeded.
    pub fn record(&mut self, entry: ConversionRecord) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn recent(&self, limit: usize) -> Vec<ConversionRecord> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
