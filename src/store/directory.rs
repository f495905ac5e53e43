use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{RecordStore, StoreConfig, StoreError};
use crate::fingerprint::TextRecord;
use crate::types::identifiers::ContentHash;

const CONFIG_FILE: &str = "store.json";
const RECORDS_DIR: &str = "records";

/// File-backed store: one JSON document per record, named by its hash.
///
/// Layout:
/// - `store.json`: the `StoreConfig` the directory was created with
/// - `records/<sha256>.json`: one serialized `TextRecord` each
#[derive(Debug)]
pub struct DirectoryStore {
    root: PathBuf,
    config: StoreConfig,
}

impl DirectoryStore {
    /// Open an existing store, or initialize `root` if it has no config yet.
    pub fn open(root: &Path, config: StoreConfig) -> Result<Self, StoreError> {
        let config_path = root.join(CONFIG_FILE);

        if config_path.exists() {
            let f = fs::File::open(&config_path)?;
            let found: StoreConfig = serde_json::from_reader(f)?;
            if found != config {
                return Err(StoreError::ConfigMismatch {
                    expected: config,
                    found,
                });
            }
        } else {
            fs::create_dir_all(root)?;
            let f = fs::File::create(&config_path)?;
            serde_json::to_writer_pretty(&f, &config)?;
            f.sync_all()?;
        }

        fs::create_dir_all(root.join(RECORDS_DIR))?;

        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn record_path(&self, id: &ContentHash) -> PathBuf {
        self.root.join(RECORDS_DIR).join(format!("{}.json", id.as_str()))
    }

    fn read_record(&self, path: &Path, expected_id: &str) -> Result<TextRecord, StoreError> {
        let f = fs::File::open(path)?;
        let record: TextRecord = serde_json::from_reader(f)?;

        if record.id.as_str() != expected_id {
            return Err(StoreError::Integrity(format!(
                "file {} holds record {}",
                path.display(),
                record.id
            )));
        }

        // Recompute from the value rather than trusting the stored id
        if !record.is_consistent() {
            return Err(StoreError::Integrity(format!(
                "record {} does not hash to its id",
                record.id
            )));
        }

        Ok(record)
    }
}

impl RecordStore for DirectoryStore {
    fn insert(&self, record: TextRecord) -> Result<(), StoreError> {
        let target = self.record_path(&record.id);

        // The temp file is removed when dropped, so every early return
        // below leaves nothing behind in `records/`
        let mut temp = tempfile::Builder::new()
            .prefix(".insert-")
            .suffix(".tmp")
            .tempfile_in(self.root.join(RECORDS_DIR))?;
        serde_json::to_writer(&mut temp, &record)?;
        temp.as_file().sync_all()?;

        // No-clobber persist: the uniqueness check and the write are one step.
        // Once the record is linked in, failing to unlink the temp name is not
        // reported as a failed insert.
        match temp.persist_noclobber(&target) {
            Ok(_) => Ok(()),
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                Err(StoreError::Duplicate(record.id))
            }
            Err(e) => Err(e.error.into()),
        }
    }

    fn get(&self, id: &ContentHash) -> Result<Option<TextRecord>, StoreError> {
        let path = self.record_path(id);
        match self.read_record(&path, id.as_str()) {
            Ok(record) => Ok(Some(record)),
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn remove(&self, id: &ContentHash) -> Result<bool, StoreError> {
        match fs::remove_file(self.record_path(id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn all(&self) -> Result<Vec<TextRecord>, StoreError> {
        let mut records = Vec::new();

        for entry in fs::read_dir(self.root.join(RECORDS_DIR))? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match self.read_record(&path, stem) {
                Ok(record) => records.push(record),
                // Removed between the listing and the read
                Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                    debug!(path = %path.display(), "Record vanished during listing");
                }
                Err(e) => return Err(e),
            }
        }

        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }
}
