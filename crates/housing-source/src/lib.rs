//! housing-source — dataset sources for the campus guide.
//!
//! Each source produces a [`HousingInfo`] snapshot. The screen never waits on
//! a source: [`spawn_load`] runs the load on a background task and hands the
//! result over a channel once it is ready.

pub mod bundled;
pub mod file;

use housing_core::HousingInfo;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::oneshot;

pub use bundled::BundledSource;
pub use file::FileSource;

/// Fixed resource name of the housing dataset.
pub const HOUSING_RESOURCE: &str = "housing.json";

/// Failure to produce a dataset snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid housing dataset ({origin}): {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Trait implemented by each dataset source.
pub trait DatasetSource: Send + Sync {
    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;

    fn load(&self) -> impl Future<Output = Result<HousingInfo, SourceError>> + Send;
}

/// Parse a dataset document. `origin` only feeds the error message.
pub fn parse_dataset(raw: &str, origin: &str) -> Result<HousingInfo, SourceError> {
    serde_json::from_str(raw).map_err(|source| SourceError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// An already-materialised snapshot. Mostly useful in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub HousingInfo);

impl DatasetSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn load(&self) -> Result<HousingInfo, SourceError> {
        Ok(self.0.clone())
    }
}

/// The source picked by configuration: a file when a path is set, otherwise
/// the bundled dataset.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Bundled(BundledSource),
    File(FileSource),
}

impl ConfiguredSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ConfiguredSource::File(FileSource::new(path)),
            None => ConfiguredSource::Bundled(BundledSource),
        }
    }
}

impl DatasetSource for ConfiguredSource {
    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Bundled(s) => s.describe(),
            ConfiguredSource::File(s) => s.describe(),
        }
    }

    async fn load(&self) -> Result<HousingInfo, SourceError> {
        match self {
            ConfiguredSource::Bundled(s) => s.load().await,
            ConfiguredSource::File(s) => s.load().await,
        }
    }
}

/// Load `source` on a background task.
///
/// The receiver yields the snapshot once it is available. On failure the
/// error is logged and the sender dropped, so the receiver resolves to
/// `Err(RecvError)` and the caller stays in its "no data" state. There is no
/// retry.
pub fn spawn_load<S>(source: S) -> oneshot::Receiver<HousingInfo>
where
    S: DatasetSource + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let origin = source.describe();
        match source.load().await {
            Ok(info) => {
                tracing::info!(
                    origin = %origin,
                    residences = info.residences.len(),
                    categories = info.categories.len(),
                    "housing dataset loaded"
                );
                // Receiver gone means the screen was closed first.
                let _ = tx.send(info);
            }
            Err(err) => {
                tracing::error!(origin = %origin, error = %err, "housing dataset failed to load");
            }
        }
    });
    rx
}
