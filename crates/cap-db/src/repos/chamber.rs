//! Chamber table repository — existing-id loads and reconciliation writes.
//!
//! Both chamber tables share one layout, so a single repository serves
//! them, parameterized by [`Chamber`]. Table names come from the enum's
//! const mapping, never from user input.

use std::collections::HashSet;

use cap_core::{Chamber, Legislator};

use crate::CapDb;
use crate::error::DatabaseError;

const SELECT_COLS: &str =
    "fullname, firstname, lastname, id, party, state, position, start_term, end_term";

fn row_to_legislator(row: &libsql::Row) -> Result<Legislator, DatabaseError> {
    Ok(Legislator {
        fullname: row.get(0)?,
        firstname: row.get(1)?,
        lastname: row.get(2)?,
        id: row.get(3)?,
        party: row.get(4)?,
        state: row.get(5)?,
        position: row.get(6)?,
        start_term: row.get(7)?,
        end_term: row.get(8)?,
    })
}

/// Counts from one chamber reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Rows inserted (ids not previously in the table).
    pub inserted: usize,
    /// Rows whose non-key columns were overwritten.
    pub updated: usize,
}

impl CapDb {
    /// Load every id currently stored in the chamber table.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn existing_ids(&self, chamber: Chamber) -> Result<HashSet<String>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT id FROM {}", chamber.table_name()), ())
            .await?;
        let mut ids = HashSet::new();
        while let Some(row) = rows.next().await? {
            ids.insert(row.get::<String>(0)?);
        }
        Ok(ids)
    }

    /// All records in the chamber table, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or a row read fails.
    pub async fn list(&self, chamber: Chamber) -> Result<Vec<Legislator>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM {} ORDER BY id",
                    chamber.table_name()
                ),
                (),
            )
            .await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_legislator(&row)?);
        }
        Ok(records)
    }

    /// Reconcile incoming records against the chamber table.
    ///
    /// Incoming records whose id is absent are inserted; the rest have
    /// their non-key columns overwritten. Stored rows whose id is not in
    /// the incoming set are left untouched (the mirror never deletes).
    /// All writes happen inside one transaction: any failure rolls the
    /// whole chamber back.
    ///
    /// A failure while reading the existing ids is logged and treated as
    /// an empty comparison set; every incoming row then attempts an
    /// insert, and a duplicate key surfaces as the transaction error.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert, update, or the commit fails.
    pub async fn reconcile(
        &self,
        chamber: Chamber,
        records: &[Legislator],
    ) -> Result<ReconcileOutcome, DatabaseError> {
        let existing = match self.existing_ids(chamber).await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!(table = %chamber, error = %e, "failed to read existing ids");
                HashSet::new()
            }
        };

        let (to_update, to_insert): (Vec<_>, Vec<_>) =
            records.iter().partition(|r| existing.contains(&r.id));

        let table = chamber.table_name();
        let tx = self.conn().transaction().await?;

        for record in &to_insert {
            tx.execute(
                &format!(
                    "INSERT INTO {table} ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    record.fullname.as_str(),
                    record.firstname.as_str(),
                    record.lastname.as_str(),
                    record.id.as_str(),
                    record.party.as_str(),
                    record.state.as_str(),
                    record.position.as_str(),
                    record.start_term.as_str(),
                    record.end_term.as_str()
                ],
            )
            .await?;
        }

        for record in &to_update {
            tx.execute(
                &format!(
                    "UPDATE {table}
                     SET fullname = ?1, firstname = ?2, lastname = ?3, party = ?4,
                         state = ?5, position = ?6, start_term = ?7, end_term = ?8
                     WHERE id = ?9"
                ),
                libsql::params![
                    record.fullname.as_str(),
                    record.firstname.as_str(),
                    record.lastname.as_str(),
                    record.party.as_str(),
                    record.state.as_str(),
                    record.position.as_str(),
                    record.start_term.as_str(),
                    record.end_term.as_str(),
                    record.id.as_str()
                ],
            )
            .await?;
        }

        // Transaction drop before this point rolls the chamber back.
        tx.commit().await?;

        let outcome = ReconcileOutcome {
            inserted: to_insert.len(),
            updated: to_update.len(),
        };
        tracing::info!(
            table = %chamber,
            inserted = outcome.inserted,
            updated = outcome.updated,
            "table updated successfully"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn test_db() -> CapDb {
        CapDb::open_local(":memory:").await.unwrap()
    }

    fn record(id: &str, lastname: &str) -> Legislator {
        Legislator {
            fullname: format!("Test {lastname}"),
            firstname: "Test".into(),
            lastname: lastname.into(),
            id: id.into(),
            party: "Independent".into(),
            state: "Vermont".into(),
            position: "sen".into(),
            start_term: "2019-01-03".into(),
            end_term: "2025-01-03".into(),
        }
    }

    #[tokio::test]
    async fn reconcile_inserts_into_empty_table() {
        let db = test_db().await;
        let records = vec![record("A000001", "Alpha"), record("B000002", "Beta")];

        let outcome = db.reconcile(Chamber::Senate, &records).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome { inserted: 2, updated: 0 });

        let stored = db.list(Chamber::Senate).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, "A000001");
    }

    #[tokio::test]
    async fn reconcile_inserts_new_updates_existing_leaves_rest() {
        let db = test_db().await;

        // Existing ids {A, B}
        db.reconcile(
            Chamber::House,
            &[record("A000001", "Alpha"), record("B000002", "Beta")],
        )
        .await
        .unwrap();

        // Incoming ids {B, C}, with B's data changed
        let mut b_changed = record("B000002", "Beta");
        b_changed.party = "Democrat".into();
        let outcome = db
            .reconcile(Chamber::House, &[b_changed, record("C000003", "Gamma")])
            .await
            .unwrap();
        assert_eq!(outcome, ReconcileOutcome { inserted: 1, updated: 1 });

        let stored = db.list(Chamber::House).await.unwrap();
        assert_eq!(stored.len(), 3);
        // A untouched
        assert_eq!(stored[0].id, "A000001");
        assert_eq!(stored[0].party, "Independent");
        // B updated in place
        assert_eq!(stored[1].id, "B000002");
        assert_eq!(stored[1].party, "Democrat");
        // C inserted
        assert_eq!(stored[2].id, "C000003");
    }

    #[tokio::test]
    async fn reconcile_twice_is_idempotent() {
        let db = test_db().await;
        let records = vec![record("A000001", "Alpha"), record("B000002", "Beta")];

        db.reconcile(Chamber::Senate, &records).await.unwrap();
        let second = db.reconcile(Chamber::Senate, &records).await.unwrap();

        assert_eq!(second, ReconcileOutcome { inserted: 0, updated: 2 });
        assert_eq!(db.list(Chamber::Senate).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn reconcile_empty_incoming_is_a_noop() {
        let db = test_db().await;
        db.reconcile(Chamber::House, &[record("A000001", "Alpha")])
            .await
            .unwrap();

        let outcome = db.reconcile(Chamber::House, &[]).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::default());
        assert_eq!(db.list(Chamber::House).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_batch_rolls_back_entirely() {
        let db = test_db().await;

        // Two incoming rows with the same id: the first insert succeeds
        // inside the transaction, the second hits the primary key. The
        // rollback must discard both.
        let records = vec![record("A000001", "Alpha"), record("A000001", "AlphaAgain")];
        let result = db.reconcile(Chamber::Senate, &records).await;
        assert!(result.is_err(), "duplicate-key insert should fail the batch");
        assert!(db.list(Chamber::Senate).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_table_degrades_id_read_and_fails_inserts() {
        let db = test_db().await;
        db.conn().execute("DROP TABLE house", ()).await.unwrap();

        // The id read fails and is treated as an empty comparison set, so
        // the record goes down the insert path, where the error surfaces.
        let result = db.reconcile(Chamber::House, &[record("A000001", "Alpha")]).await;
        assert!(result.is_err());

        // The other chamber's table is unaffected.
        let outcome = db
            .reconcile(Chamber::Senate, &[record("B000002", "Beta")])
            .await
            .unwrap();
        assert_eq!(outcome, ReconcileOutcome { inserted: 1, updated: 0 });
    }

    #[tokio::test]
    async fn chambers_are_isolated() {
        let db = test_db().await;
        db.reconcile(Chamber::House, &[record("H000001", "Rep")])
            .await
            .unwrap();

        assert!(db.existing_ids(Chamber::Senate).await.unwrap().is_empty());
        assert_eq!(
            db.existing_ids(Chamber::House)
                .await
                .unwrap()
                .into_iter()
                .collect::<Vec<_>>(),
            vec!["H000001".to_string()]
        );
    }

    #[tokio::test]
    async fn update_preserves_primary_key() {
        let db = test_db().await;
        db.reconcile(Chamber::Senate, &[record("A000001", "Alpha")])
            .await
            .unwrap();

        let mut changed = record("A000001", "Renamed");
        changed.end_term = "2031-01-03".into();
        db.reconcile(Chamber::Senate, &[changed]).await.unwrap();

        let stored = db.list(Chamber::Senate).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, "A000001");
        assert_eq!(stored[0].lastname, "Renamed");
        assert_eq!(stored[0].end_term, "2031-01-03");
    }
}
