//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    recorded_at TEXT NOT NULL,
    language TEXT NOT NULL,
    answers TEXT NOT NULL,
    advice_short TEXT NOT NULL,
    urgent INTEGER NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_results_recorded_at ON results (recorded_at);
";

/// Current schema version, stored in `PRAGMA user_version`.
const SCHEMA_VERSION: i64 = 2;

impl super::Database {
    /// Creates the tables if needed and brings older files up to date.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Version 1 files lack the `urgent` column; their rows default it to 0.
    fn apply_migrations(&self) -> Result<()> {
        let has_urgent_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('results') WHERE name = 'urgent'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect results table")?;

        if !has_urgent_column {
            self.connection
                .execute(
                    "ALTER TABLE results ADD COLUMN urgent INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .db_context("Failed to add urgent column to results table")?;
        }

        self.connection
            .pragma_update(None, "user_version", SCHEMA_VERSION)
            .db_context("Failed to record schema version")?;

        Ok(())
    }

    /// Schema version recorded in the database file.
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }
}
