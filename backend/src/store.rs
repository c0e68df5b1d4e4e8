//! # Form Definition Store
//!
//! Persists form definitions as JSON documents in the `forms` table of a local
//! SQLite database, one row per form id. This is the only durable state of the
//! portal and it offers no conflict handling: the last write for an id wins.
//!
//! Every operation opens its own connection, so a `FormStore` is just the
//! database path and can be cloned into each actix worker. Handlers call the
//! blocking methods through [`FormStore::run`], which moves them onto tokio's
//! blocking pool.

use common::model::form::FormDefinition;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use thiserror::Error;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS forms (
    id TEXT PRIMARY KEY,
    document TEXT NOT NULL
)";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored document is not a valid form: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("store worker failed: {0}")]
    Worker(String),
}

#[derive(Debug, Clone)]
pub struct FormStore {
    path: PathBuf,
}

impl FormStore {
    /// Opens the database at `path`, creating the `forms` table if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.connect()?.execute_batch(SCHEMA)?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// All definitions in the order they were first stored.
    pub fn list_all(&self) -> Result<Vec<FormDefinition>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT document FROM forms ORDER BY rowid")?;
        let documents = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        documents
            .iter()
            .map(|doc| serde_json::from_str(doc).map_err(StoreError::from))
            .collect()
    }

    pub fn get(&self, form_id: &str) -> Result<Option<FormDefinition>, StoreError> {
        let conn = self.connect()?;
        let document: Option<String> = conn
            .query_row(
                "SELECT document FROM forms WHERE id = ?1",
                params![form_id],
                |row| row.get(0),
            )
            .optional()?;

        match document {
            Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
            None => Ok(None),
        }
    }

    /// Inserts or replaces the document for `form.id`. A replaced form keeps
    /// its position in [`list_all`](Self::list_all).
    pub fn upsert(&self, form: &FormDefinition) -> Result<(), StoreError> {
        let document = serde_json::to_string(form)?;
        self.connect()?.execute(
            "INSERT INTO forms (id, document) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET document = excluded.document",
            params![&form.id, document],
        )?;
        Ok(())
    }

    /// Deletes by id. Returns whether a document existed.
    pub fn delete(&self, form_id: &str) -> Result<bool, StoreError> {
        let removed = self
            .connect()?
            .execute("DELETE FROM forms WHERE id = ?1", params![form_id])?;
        Ok(removed > 0)
    }

    /// Runs a blocking store operation off the async executor.
    pub async fn run<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&FormStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| StoreError::Worker(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::builder::{FieldChange, FormBuilder};
    use common::catalog::FormCatalog;
    use common::model::field::FieldType;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FormStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FormStore::open(dir.path().join("portal.sqlite")).unwrap();
        (dir, store)
    }

    fn built_form(id: &str, name: &str) -> FormDefinition {
        let mut builder = FormBuilder::load(id, &FormCatalog::default());
        builder.set_name(name);
        builder.set_handlers("bella.arena,jaye.sung");
        let when = builder.add_field();
        builder.update_field(&when, FieldChange::label("날짜 및 시간"));
        builder.update_field(&when, FieldChange::field_type(FieldType::Datetime));
        let room = builder.add_field();
        builder.update_field(&room, FieldChange::field_type(FieldType::Dropdown));
        builder.update_field(&room, FieldChange::options(vec!["A".into(), "".into(), "B".into()]));
        builder.save().unwrap()
    }

    #[test]
    fn saved_form_round_trips_by_id() {
        let (_dir, store) = temp_store();
        let form = built_form("form_1", "회의실 예약");
        store.upsert(&form).unwrap();

        assert_eq!(store.get("form_1").unwrap(), Some(form));
        assert_eq!(store.get("form_2").unwrap(), None);
    }

    #[test]
    fn upsert_overwrites_in_place() {
        let (_dir, store) = temp_store();
        store.upsert(&built_form("a", "A")).unwrap();
        store.upsert(&built_form("b", "B")).unwrap();
        store.upsert(&built_form("a", "A2")).unwrap();

        let names: Vec<_> = store.list_all().unwrap().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["A2", "B"]);
    }

    #[test]
    fn delete_reports_whether_form_existed() {
        let (_dir, store) = temp_store();
        store.upsert(&built_form("a", "A")).unwrap();

        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn reopening_keeps_documents() {
        let (dir, store) = temp_store();
        store.upsert(&built_form("a", "A")).unwrap();

        let reopened = FormStore::open(dir.path().join("portal.sqlite")).unwrap();
        assert_eq!(reopened.list_all().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_document_surfaces_as_serde_error() {
        let (_dir, store) = temp_store();
        store
            .connect()
            .unwrap()
            .execute("INSERT INTO forms (id, document) VALUES ('x', 'not json')", [])
            .unwrap();

        assert!(matches!(store.get("x"), Err(StoreError::Serde(_))));
        assert!(matches!(store.list_all(), Err(StoreError::Serde(_))));
    }

    #[tokio::test]
    async fn run_executes_on_blocking_pool() {
        let (_dir, store) = temp_store();
        let form = built_form("a", "A");
        let to_save = form.clone();
        store.run(move |s| s.upsert(&to_save)).await.unwrap();

        let listed = store.run(|s| s.list_all()).await.unwrap();
        assert_eq!(listed, vec![form]);
    }
}
