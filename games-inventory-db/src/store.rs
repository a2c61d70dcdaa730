//! Storage engine: the connections behind the gateway.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use crate::schema::{self, SchemaError};

/// Owns the SQLite connections for one inventory database.
///
/// All writes go through a single writable connection. File-backed stores
/// also keep a read-only connection for queries; in-memory stores read
/// through the writer.
pub struct GameStore {
    writer: Connection,
    reader: Option<Connection>,
    path: Option<PathBuf>,
}

impl GameStore {
    /// Open or create the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        let writer = schema::open_database(path)?;
        let reader = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        Ok(Self {
            writer,
            reader: Some(reader),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory store.
    pub fn open_memory() -> Result<Self, SchemaError> {
        Ok(Self {
            writer: schema::open_memory()?,
            reader: None,
            path: None,
        })
    }

    pub fn writable(&self) -> &Connection {
        &self.writer
    }

    pub fn readable(&self) -> &Connection {
        self.reader.as_ref().unwrap_or(&self.writer)
    }

    /// Backing file, or `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl std::fmt::Debug for GameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStore")
            .field("path", &self.path)
            .field("separate_reader", &self.reader.is_some())
            .finish()
    }
}
