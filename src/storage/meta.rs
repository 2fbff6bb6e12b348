//! Store metadata
//!
//! Records the id strategy a store was started with. A store keeps that
//! strategy for its whole life, so ids from both strategies never end up in
//! one file; a later settings change is refused.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::file_io::write_atomic;
use crate::config::IdStrategy;
use crate::error::{SalesError, SalesResult};

/// Facts about a store that settings must not change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreMeta {
    pub id_strategy: IdStrategy,
}

impl StoreMeta {
    /// Read the metadata file, `None` if it does not exist yet
    pub fn load(path: &Path) -> SalesResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| SalesError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let meta = serde_json::from_str(&contents).map_err(|e| {
            SalesError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Some(meta))
    }

    pub fn save(&self, path: &Path) -> SalesResult<()> {
        write_atomic(path, |w| {
            serde_json::to_writer_pretty(&mut *w, self)?;
            Ok(())
        })
    }
}

/// Record `strategy` for the store on first use, or check it against the
/// recorded one
pub fn pin_id_strategy(path: &Path, strategy: IdStrategy) -> SalesResult<()> {
    match StoreMeta::load(path)? {
        Some(meta) if meta.id_strategy == strategy => Ok(()),
        Some(meta) => Err(SalesError::Config(format!(
            "the store uses the '{}' id strategy but settings select '{}'; \
             an existing store cannot switch strategies",
            meta.id_strategy, strategy
        ))),
        None => {
            StoreMeta {
                id_strategy: strategy,
            }
            .save(path)?;
            info!(%strategy, "recorded id strategy for store");
            Ok(())
        }
    }
}
