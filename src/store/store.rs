//! The file-backed catalog store
//!
//! Construction is fail-fast: the root directory is validated and every
//! record loaded before `open` returns, so a store either answers queries
//! over a fully consistent set or does not exist.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::filter::FilterEvaluator;
use crate::loader::RecordLoader;
use crate::observability::Logger;
use crate::query::{IsolationToken, Query};
use crate::record::Record;
use crate::schema::{record_schema, RecordSchema, SchemaRegistry};

use super::errors::{StoreError, StoreResult};
use super::result::RecordCollection;

/// A read-only catalog store over a directory of record files
#[derive(Debug)]
pub struct CatalogStore {
    root: PathBuf,
    registry: SchemaRegistry,
    /// Records in load order, shared with result collections
    records: Vec<Arc<Record>>,
}

impl CatalogStore {
    /// Opens a store over the given root directory.
    ///
    /// Fails with a configuration error when the root does not exist or is
    /// not a directory, and with a load error when any record file is
    /// malformed. No partial construction: on any error there is no store.
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref();

        if !root.exists() {
            return Err(StoreError::configuration(
                root.display().to_string(),
                "path does not exist",
            ));
        }
        if !root.is_dir() {
            return Err(StoreError::configuration(
                root.display().to_string(),
                "path is not a directory",
            ));
        }

        let registry = SchemaRegistry::with_builtin();
        let loader = RecordLoader::new(root, record_schema());
        let records: Vec<Arc<Record>> =
            loader.load_all()?.into_iter().map(Arc::new).collect();

        let record_count = records.len().to_string();
        Logger::info(
            "STORE_OPENED",
            &[
                ("records", record_count.as_str()),
                ("root", &root.display().to_string()),
            ],
        );

        Ok(Self {
            root: root.to_path_buf(),
            registry,
            records,
        })
    }

    /// Returns the root directory this store was opened on
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the schemas this store serves, in registration order
    pub fn schemas(&self) -> Vec<&RecordSchema> {
        self.registry.all_schemas().collect()
    }

    /// Total number of loaded records, before any filtering
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Looks up a single record by its identifier
    pub fn record_by_id(&self, id: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .map(Arc::as_ref)
    }

    /// Executes a query and returns the matching records.
    ///
    /// Candidates are visited in load order; the filter is applied first,
    /// then `start_index` matches are skipped and at most `max_records`
    /// matches are yielded. An offset past the last match yields an empty
    /// collection; a short tail page clamps without error. The isolation
    /// token has no effect in this read-only store.
    pub fn records(&self, query: &Query, _token: IsolationToken) -> StoreResult<RecordCollection> {
        if !self.registry.contains(&query.type_name) {
            return Err(StoreError::UnknownType(query.type_name.clone()));
        }

        let matches: Vec<Arc<Record>> = self
            .records
            .iter()
            .filter(|record| FilterEvaluator::matches(record, &query.filter))
            .skip(query.start_index)
            .take(query.max_records.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        let matched = matches.len().to_string();
        Logger::trace(
            "QUERY_EXECUTED",
            &[("matched", matched.as_str()), ("type", &query.type_name)],
        );

        Ok(RecordCollection::new(matches))
    }
}
