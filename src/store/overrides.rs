//! DuckDB-backed override persistence

use crate::error::{Error, Result};
use crate::types::PokemonRecord;
use duckdb::{params, Connection};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS pokemon_overrides (
    pokeapi_id BIGINT PRIMARY KEY,
    name       VARCHAR NOT NULL,
    document   VARCHAR NOT NULL,
    updated_at VARCHAR NOT NULL
);
";

/// Whether an upsert created a new row or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Store for locally overridden Pokémon records.
///
/// The DuckDB connection is not `Sync`, so it sits behind a mutex; each
/// operation holds the lock for a single statement.
pub struct OverrideStore {
    conn: Mutex<Connection>,
}

impl OverrideStore {
    /// Open (or create) a store at the given file path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!("Opened override store at {}", path.display());
        Self::with_connection(conn)
    }

    /// Open an in-memory store, dropped on close
    pub fn in_memory() -> Result<Self> {
        debug!("Opening in-memory override store");
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::store("override store mutex poisoned"))
    }

    /// Fetch an override by pokédex id, `None` when no row exists
    pub fn get(&self, id: u32) -> Result<Option<PokemonRecord>> {
        let conn = self.lock()?;
        let row = conn.query_row(
            "SELECT document FROM pokemon_overrides WHERE pokeapi_id = ?",
            params![id],
            |row| row.get::<_, String>(0),
        );

        match row {
            Ok(document) => Ok(Some(serde_json::from_str(&document)?)),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert or replace a record keyed by its pokédex id
    pub fn upsert(&self, record: &PokemonRecord) -> Result<UpsertOutcome> {
        let existed = self.get(record.id)?.is_some();
        let document = serde_json::to_string(record)?;
        let now = chrono::Utc::now().to_rfc3339();

        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO pokemon_overrides (pokeapi_id, name, document, updated_at)
             VALUES (?, ?, ?, ?)",
            params![record.id, record.name, document, now],
        )?;
        debug!("Stored override for id {}", record.id);

        Ok(if existed {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Created
        })
    }

    /// Number of stored overrides
    pub fn len(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM pokemon_overrides",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Whether the store holds no overrides
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl std::fmt::Debug for OverrideStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideStore").finish_non_exhaustive()
    }
}
