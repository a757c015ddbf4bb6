use tracing::{debug, info, instrument, warn};

use super::dto::{BatchReport, SeedSummary};
use super::error::SeedError;
use super::plan::BatchPlan;
use crate::users::{RecordSource, UserRecord, UserStore};

/// Replace the contents of `store` with `plan.total()` generated users.
///
/// Batches run one after another. Documents the store rejects individually are
/// counted and skipped; any other store failure stops the run and leaves the
/// batches already written in place.
#[instrument(skip_all, fields(total = plan.total(), batch_size = plan.batch_size()))]
pub async fn seed_users<S, G>(
    store: &S,
    source: &mut G,
    plan: BatchPlan,
) -> Result<SeedSummary, SeedError>
where
    S: UserStore + ?Sized,
    G: RecordSource + ?Sized,
{
    info!("Clearing existing users...");
    let deleted = store.delete_all().await.map_err(SeedError::Clear)?;
    info!(deleted, "✓ Cleared existing users");

    // built on the empty collection; without them duplicates are simply stored
    if let Err(e) = store.ensure_indexes().await {
        warn!(error = %e, "could not ensure unique user indexes; continuing");
    }

    let total_batches = plan.batch_count();
    info!(
        "Generating {} users in {} batches...",
        plan.total(),
        total_batches
    );

    let mut summary = SeedSummary {
        deleted,
        ..SeedSummary::default()
    };

    for (i, len) in plan.batch_lens().enumerate() {
        let batch = i + 1;
        let records: Vec<UserRecord> = (0..len).map(|_| source.next_record()).collect();

        let outcome = store
            .insert_unordered(&records)
            .await
            .map_err(|e| SeedError::Insert { batch, source: e })?;

        let report = BatchReport {
            index: batch,
            total_batches,
            attempted: records.len(),
            inserted: outcome.inserted,
            rejected: outcome.rejected.len(),
        };

        if let Some(first) = outcome.rejected.first() {
            warn!(
                batch,
                rejected = report.rejected,
                code = first.code,
                first = %first.message,
                "documents skipped by the store"
            );
        }
        info!(
            batch,
            total_batches,
            inserted = report.inserted,
            "✓ Batch {}/{} complete ({} users)",
            batch,
            total_batches,
            report.inserted
        );
        summary.batches.push(report);
    }

    summary.persisted = store.count().await.map_err(SeedError::Verify)?;

    if summary.rejected() > 0 {
        info!(
            skipped = summary.rejected(),
            persisted = summary.persisted,
            "✓ Successfully seeded {} users",
            summary.inserted()
        );
    } else {
        info!(
            persisted = summary.persisted,
            "✓ Successfully seeded {} users",
            summary.inserted()
        );
    }
    if let Ok(json) = serde_json::to_string(&summary) {
        debug!(%json, "seed summary");
    }

    Ok(summary)
}
