use serde::Serialize;

/// Result of one unordered bulk insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub index: usize,         // 1-based
    pub total_batches: usize,
    pub attempted: usize,
    pub inserted: usize,
    pub rejected: usize,      // documents the store refused
}

/// Everything a finished seeding run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub deleted: u64,
    pub batches: Vec<BatchReport>,
    pub persisted: u64,
}

impl SeedSummary {
    pub fn inserted(&self) -> usize {
        self.batches.iter().map(|b| b.inserted).sum()
    }

    pub fn rejected(&self) -> usize {
        self.batches.iter().map(|b| b.rejected).sum()
    }
}
