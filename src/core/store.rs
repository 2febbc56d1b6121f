//! SQLite store behind the catalog and the key/value configuration.
//!
//! Two tables: `Project (Id, Name, Path UNIQUE)` and
//! `Configuration (Id, Key UNIQUE, Value <= 1000 chars)`. Snapshot fields of a
//! project are never persisted. Every public call is its own transaction; nothing
//! spanning several calls is exposed.

use crate::core::error::{ProjectExplorerError, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// Maximum length of a configuration value.
pub const MAX_CONFIG_VALUE_LEN: usize = 1000;

/// Persisted part of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: i64,
    pub name: String,
    pub path: PathBuf,
}

pub struct Database {
    conn: Connection,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.conn.path())
            .finish()
    }
}

impl Database {
    /// Opens (creating if needed) the database file and makes sure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    // === Project table ===

    /// All projects in insertion order.
    pub fn list_projects(&self) -> Result<Vec<ProjectRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT Id, Name, Path FROM Project ORDER BY Id")?;

        let rows = stmt.query_map([], |row| {
            Ok(ProjectRow {
                id: row.get(0)?,
                name: row.get(1)?,
                path: PathBuf::from(row.get::<_, String>(2)?),
            })
        })?;

        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Inserts a project and returns its new id.
    pub fn insert_project(&mut self, name: &str, path: &Path) -> Result<i64> {
        let path = path_str(path)?;

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO Project (Name, Path) VALUES (?1, ?2)",
            params![name, path],
        )
        .map_err(|e| map_unique_violation(e, path))?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(id)
    }

    /// Deletes a project, returning whether a row was removed.
    pub fn delete_project(&mut self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM Project WHERE Id = ?1", params![id])?;
        Ok(removed > 0)
    }

    /// Writes the given rows back in a single transaction.
    pub fn update_projects(&mut self, rows: &[ProjectRow]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for row in rows {
            let path = path_str(&row.path)?;
            tx.execute(
                "UPDATE Project SET Name = ?1, Path = ?2 WHERE Id = ?3",
                params![row.name, path, row.id],
            )
            .map_err(|e| map_unique_violation(e, path))?;
        }
        tx.commit()?;

        Ok(())
    }

    /// True if a project other than `id` has `path`. `id == 0` checks every project.
    pub fn project_exists(&self, id: i64, path: &Path) -> Result<bool> {
        let path = path_str(path)?;
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM Project WHERE (?1 = 0 OR Id <> ?1) AND Path = ?2)",
            params![id, path],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    // === Configuration table ===

    pub fn config_value(&self, key: i64) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(
                "SELECT Value FROM Configuration WHERE Key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?)
    }

    /// Inserts or updates several values in one transaction.
    pub fn upsert_config_values(&mut self, values: &[(i64, String)]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in values {
            tx.execute(
                "INSERT INTO Configuration (Key, Value) VALUES (?1, ?2)
                 ON CONFLICT(Key) DO UPDATE SET Value = excluded.Value",
                params![key, value],
            )?;
        }
        tx.commit()?;

        Ok(())
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| ProjectExplorerError::invalid_utf8_path(path))
}

fn map_unique_violation(err: rusqlite::Error, path: &str) -> ProjectExplorerError {
    match err.sqlite_error_code() {
        Some(rusqlite::ErrorCode::ConstraintViolation) => ProjectExplorerError::duplicate_path(path),
        _ => err.into(),
    }
}
