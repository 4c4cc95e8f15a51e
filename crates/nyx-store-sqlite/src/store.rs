//! [`SqliteStorage`] — the SQLite implementation of [`Storage`].

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use nyx_core::storage::Storage;
use rusqlite::OptionalExtension as _;
use tracing::debug;

use crate::{
  Error, Result,
  schema::{SCHEMA, SCHEMA_VERSION},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// Blog storage backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStorage {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStorage {
  /// Open (or create) a database at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory database — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    let found: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("PRAGMA user_version", [], |r| r.get(0))?))
      .await?;

    if found > SCHEMA_VERSION {
      return Err(Error::SchemaVersion {
        found,
        supported: SCHEMA_VERSION,
      });
    }

    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn now_str() -> String { Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true) }

// ─── Storage impl ────────────────────────────────────────────────────────────

impl Storage for SqliteStorage {
  type Error = Error;

  async fn get(&self, key: &str) -> Result<Option<String>> {
    let key = key.to_owned();
    let value = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT value FROM kv WHERE key = ?1",
            rusqlite::params![key],
            |row| row.get::<_, String>(0),
          )
          .optional()?)
      })
      .await?;
    Ok(value)
  }

  async fn set(&self, key: &str, value: String) -> Result<()> {
    let key_str = key.to_owned();
    let at_str  = now_str();
    let bytes   = value.len();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
           ON CONFLICT(key) DO UPDATE SET
             value      = excluded.value,
             updated_at = excluded.updated_at",
          rusqlite::params![key_str, value, at_str],
        )?;
        Ok(())
      })
      .await?;

    debug!(key, bytes, "stored value");
    Ok(())
  }

  async fn remove(&self, key: &str) -> Result<()> {
    let key_str = key.to_owned();
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM kv WHERE key = ?1", rusqlite::params![key_str])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
