//! In-memory SQLite database layer for the agrofood emissions dataset.
//!
//! This crate loads the emissions CSV into an in-memory SQLite database and
//! exposes typed query methods for the chart builders.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability; single-threaded
//! - In-memory SQLite via `rusqlite` (also compiles for `wasm32-unknown-unknown`)
//! - CSV either embedded with `include_str!` (dashboard) or read from disk (CLI)
//! - [`DatasetCache`] memoizes file loads keyed by path and modification time
//!
//! # Usage
//!
//! ```rust
//! use agro_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_emissions("Area,Year,Forestland\nAfghanistan,1990,-2388.8\n").unwrap();
//!
//! let regions = db.query_regions().unwrap();
//! let history = db.query_region_history("Afghanistan").unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(history.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod cache;
mod loader;
pub mod models;
mod queries;
pub mod schema;

pub use cache::{CacheLookup, DatasetCache};

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the emissions table.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone, Debug)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Whether both handles share one underlying connection.
    pub fn same_connection(&self, other: &Database) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        self.same_connection(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        // Both should reference the same underlying connection
        db.load_emissions("Area,Year\nChad,2000\n").unwrap();
        assert_eq!(
            db2.record_count().unwrap(),
            1,
            "Clone should see same data via shared Rc"
        );
        assert!(db.same_connection(&db2));
        assert!(!db.same_connection(&Database::new().unwrap()));
    }

    #[test]
    fn database_is_debug_printable() {
        let err = Database::from_path("/nonexistent/emissions.csv").unwrap_err();
        assert!(format!("{err:#}").contains("failed to open"));
        assert!(format!("{:?}", Database::new().unwrap()).starts_with("Database"));
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.record_count().unwrap(), 0);
        assert!(db.query_region_names().unwrap().is_empty());
    }
}
