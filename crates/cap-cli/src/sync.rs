//! Sync pipeline: fetch → transform → reconcile both chambers.
//!
//! One run mirrors the full upstream dataset into the local store:
//! 1. Fetch the legislators JSON (`cap-upstream::UpstreamClient`)
//! 2. Normalize into house and senate record sets (`transform::split_chambers`)
//! 3. Reconcile each chamber table by id (`cap-db::CapDb::reconcile`)
//!
//! A fetch failure is logged and treated as an empty dataset — the run
//! completes with nothing to write. A reconcile failure rolls back that
//! chamber only; the other chamber still runs, and the error is reported
//! at the end.

use cap_core::Chamber;
use cap_db::CapDb;
use cap_db::repos::ReconcileOutcome;
use cap_upstream::UpstreamClient;
use cap_upstream::transform::{ChamberSets, split_chambers};

/// Orchestrates one full sync run.
pub struct SyncPipeline {
    db: CapDb,
    client: UpstreamClient,
}

/// Result of a sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Raw member objects received from upstream.
    pub fetched: usize,
    pub house: ReconcileOutcome,
    pub senate: ReconcileOutcome,
}

impl SyncReport {
    /// Total rows inserted across both chambers.
    #[must_use]
    pub const fn inserted(&self) -> usize {
        self.house.inserted + self.senate.inserted
    }

    /// Total rows updated across both chambers.
    #[must_use]
    pub const fn updated(&self) -> usize {
        self.house.updated + self.senate.updated
    }
}

impl SyncPipeline {
    /// Create a pipeline over an open database and upstream client.
    #[must_use]
    pub const fn new(db: CapDb, client: UpstreamClient) -> Self {
        Self { db, client }
    }

    /// Run one full sync against the given upstream URL.
    ///
    /// # Errors
    ///
    /// Returns an error only when upstream data was fetched but a chamber
    /// reconciliation failed; fetch failures yield an empty run and `Ok`.
    pub async fn run(&self, url: &str) -> anyhow::Result<SyncReport> {
        let members = match self.client.fetch_current(url).await {
            Ok(members) => members,
            Err(e) => {
                tracing::error!(url, error = %e, "error fetching legislators data");
                Vec::new()
            }
        };
        let fetched = members.len();
        let sets = split_chambers(&members);
        tracing::debug!(
            fetched,
            house = sets.house.len(),
            senate = sets.senate.len(),
            "transformed upstream members"
        );

        let report = self.reconcile_all(fetched, &sets).await?;
        Ok(report)
    }

    /// Reconcile both chamber tables from already-transformed sets.
    async fn reconcile_all(
        &self,
        fetched: usize,
        sets: &ChamberSets,
    ) -> anyhow::Result<SyncReport> {
        let mut report = SyncReport {
            fetched,
            ..SyncReport::default()
        };
        let mut failed = false;

        for chamber in [Chamber::House, Chamber::Senate] {
            match self.db.reconcile(chamber, sets.records(chamber)).await {
                Ok(outcome) => match chamber {
                    Chamber::House => report.house = outcome,
                    Chamber::Senate => report.senate = outcome,
                },
                Err(e) => {
                    tracing::error!(table = %chamber, error = %e, "error updating table");
                    failed = true;
                }
            }
        }

        if failed && fetched > 0 {
            anyhow::bail!("sync finished with reconciliation errors");
        }
        Ok(report)
    }
}
