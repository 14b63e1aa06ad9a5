//! Dataset source backed by a JSON file on disk.

use crate::{parse_dataset, DatasetSource, SourceError};
use housing_core::HousingInfo;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<HousingInfo, SourceError> {
        let origin = self.describe();
        tracing::debug!(path = %origin, "reading housing dataset");
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io { path: origin.clone(), source })?;
        parse_dataset(&raw, &origin)
    }
}
