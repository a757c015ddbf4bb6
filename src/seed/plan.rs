use super::error::SeedError;

/// How a target user count splits into fixed-size batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    total: usize,
    batch_size: usize,
}

impl BatchPlan {
    pub fn new(total: usize, batch_size: usize) -> Result<Self, SeedError> {
        if total == 0 || batch_size == 0 {
            return Err(SeedError::InvalidPlan { total, batch_size });
        }
        Ok(Self { total, batch_size })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn batch_count(&self) -> usize {
        self.total.div_ceil(self.batch_size)
    }

    /// Size of the zero-based batch `index`; 0 past the end.
    pub fn batch_len(&self, index: usize) -> usize {
        let done = index.saturating_mul(self.batch_size);
        self.batch_size.min(self.total.saturating_sub(done))
    }

    pub fn batch_lens(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.batch_count()).map(|i| self.batch_len(i))
    }
}
