//! The housing dataset shipped inside the binary.

use crate::{parse_dataset, DatasetSource, SourceError, HOUSING_RESOURCE};
use housing_core::HousingInfo;

const BUNDLED_DATASET: &str = include_str!("../assets/housing.json");

/// Reads the dataset embedded at compile time, so the guide works without
/// any files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl BundledSource {
    /// Parse the embedded dataset synchronously.
    pub fn snapshot() -> Result<HousingInfo, SourceError> {
        parse_dataset(BUNDLED_DATASET, HOUSING_RESOURCE)
    }
}

impl DatasetSource for BundledSource {
    fn describe(&self) -> String {
        format!("bundled:{HOUSING_RESOURCE}")
    }

    async fn load(&self) -> Result<HousingInfo, SourceError> {
        Self::snapshot()
    }
}
