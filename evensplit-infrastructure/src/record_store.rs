use evensplit_application::{Record, RecordStore, RecordStoreError};
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Keeps the whole history as a pretty-printed JSON array in one file.
///
/// A missing file reads as an empty history. Writes go to a sibling temp file
/// that is then renamed over the target.
pub struct JsonFileRecordStore {
    path: PathBuf,
}

impl JsonFileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for JsonFileRecordStore {
    fn load(&self) -> Result<Vec<Record>, RecordStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Record file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "Corrupt record file");
            RecordStoreError::Serialization(err.to_string())
        })
    }

    fn save(&self, records: &[Record]) -> Result<(), RecordStoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| RecordStoreError::Serialization(err.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        if let Err(err) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(err.into());
        }

        tracing::debug!(
            path = %self.path.display(),
            record_count = records.len(),
            "Wrote record file"
        );
        Ok(())
    }
}

/// Process-local history, used for dry runs.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Vec<Record>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load(&self) -> Result<Vec<Record>, RecordStoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| io::Error::other("record store lock poisoned"))?;
        Ok(records.clone())
    }

    fn save(&self, records: &[Record]) -> Result<(), RecordStoreError> {
        let mut stored = self
            .records
            .lock()
            .map_err(|_| io::Error::other("record store lock poisoned"))?;
        *stored = records.to_vec();
        Ok(())
    }
}
