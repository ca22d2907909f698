use crate::api::CollectionStore;
use crate::config::PassportConfig;
use crate::error::{PassportError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct PassportContext {
    pub collection: CollectionStore<FileStore>,
    pub config: PassportConfig,
    pub data_dir: PathBuf,
}

/// Resolve where the collection lives: `home` when given, otherwise the
/// platform data directory (e.g. `~/.local/share/passport` on Linux).
pub fn data_dir(home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = home {
        return Ok(home);
    }
    ProjectDirs::from("com", "coffee-passport", "passport")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PassportError::Store("Could not determine data directory".to_string()))
}

pub fn initialize(data_dir: &Path) -> PassportContext {
    let config = PassportConfig::load(data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        PassportConfig::default()
    });

    let store = FileStore::new(data_dir.to_path_buf());
    let collection = CollectionStore::open_with(store, &config);

    PassportContext {
        collection,
        config,
        data_dir: data_dir.to_path_buf(),
    }
}
