//! Result record inserts and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Answers, Language, ResultRecord, StoredResult},
    params::ListResults,
};

const INSERT_RESULT_SQL: &str = "INSERT INTO results (recorded_at, language, answers, advice_short, urgent) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_RESULT_SQL: &str =
    "SELECT id, recorded_at, language, answers, advice_short, urgent FROM results WHERE id = ?1";
const RESULT_COLUMNS: &str = "id, recorded_at, language, answers, advice_short, urgent";

impl super::Database {
    fn build_result_from_row(row: &rusqlite::Row) -> rusqlite::Result<StoredResult> {
        let language_str: String = row.get(2)?;
        let language = language_str.parse::<Language>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            )
        })?;
        let answers: Answers = serde_json::from_str(&row.get::<_, String>(3)?)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

        Ok(StoredResult {
            id: row.get::<_, i64>(0)? as u64,
            record: ResultRecord {
                timestamp: row.get::<_, String>(1)?.parse::<Timestamp>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
                })?,
                language,
                answers,
                advice_short: row.get(4)?,
                urgent: row.get(5)?,
            },
        })
    }

    /// Stores a result record and returns it with its new ID.
    pub fn save_result(&mut self, record: &ResultRecord) -> Result<StoredResult> {
        let answers = serde_json::to_string(&record.answers)?;
        // Fixed nanosecond precision keeps text order equal to time order.
        let recorded_at = format!("{:.9}", record.timestamp);

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_RESULT_SQL,
            params![
                recorded_at,
                record.language.as_str(),
                answers,
                record.advice_short,
                record.urgent
            ],
        )
        .db_context("Failed to insert result")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(StoredResult {
            id,
            record: record.clone(),
        })
    }

    /// Retrieves a stored result by its ID.
    pub fn get_result(&self, id: u64) -> Result<Option<StoredResult>> {
        self.connection
            .query_row(SELECT_RESULT_SQL, params![id as i64], Self::build_result_from_row)
            .optional()
            .db_context("Failed to query result")
    }

    /// Lists stored results, newest first.
    pub fn list_results(&self, filter: &ListResults) -> Result<Vec<StoredResult>> {
        let mut query = format!("SELECT {RESULT_COLUMNS} FROM results");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(language) = filter.language {
            query.push_str(" WHERE language = ?");
            params_vec.push(Box::new(language.as_str()));
        }

        query.push_str(" ORDER BY recorded_at DESC, id DESC");

        if let Some(limit) = filter.limit {
            query.push_str(" LIMIT ?");
            params_vec.push(Box::new(i64::from(limit)));
        }

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let results = stmt
            .query_map(&params_refs[..], Self::build_result_from_row)
            .db_context("Failed to query results")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch results")?;

        Ok(results)
    }
}
