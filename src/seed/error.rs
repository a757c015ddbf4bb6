use thiserror::Error;

use crate::users::StoreError;

/// Fatal seeding failures. Per-document rejections are not errors.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("invalid batch plan: {total} users in batches of {batch_size}")]
    InvalidPlan { total: usize, batch_size: usize },

    #[error("failed to clear existing users")]
    Clear(#[source] StoreError),

    #[error("batch {batch} insert failed")]
    Insert {
        batch: usize,
        #[source]
        source: StoreError,
    },

    #[error("failed to count seeded users")]
    Verify(#[source] StoreError),
}
