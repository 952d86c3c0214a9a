//! # cap-db
//!
//! libSQL mirror store for capitol-sync.
//!
//! Holds the `house` and `senate` tables and the reconciliation logic that
//! keeps them in sync with the upstream dataset: insert-or-update keyed by
//! the stable bioguide id, no deletions.
//!
//! Uses the `libsql` crate — local file databases by default, remote sqld
//! when the config carries a URL and auth token.

pub mod error;
mod migrations;
pub mod repos;

use cap_config::DatabaseConfig;
use error::DatabaseError;
use libsql::Builder;

/// Central database handle for the mirror store.
///
/// Wraps a libSQL database and connection. One handle serves a full sync
/// run; dropping it closes the connection on every exit path.
pub struct CapDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CapDb {
    /// Open a local-only database at the given path (`:memory:` works).
    ///
    /// Runs migrations automatically, so both chamber tables exist by the
    /// time this returns.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::from_database(db).await
    }

    /// Open the database described by the config: remote sqld when url and
    /// auth token are both set, the local file path otherwise.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            let db = Builder::new_remote(config.url.clone(), config.auth_token.clone())
                .build()
                .await?;
            Self::from_database(db).await
        } else {
            Self::open_local(&config.path).await
        }
    }

    async fn from_database(db: libsql::Database) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;
        let cap_db = Self { db, conn };
        cap_db.run_migrations().await?;
        Ok(cap_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
