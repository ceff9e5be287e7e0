use crd_defs::{StateError, StateFile, STATE_FORMAT_VERSION};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// JSON state file on local disk.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StateStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty state.
    pub async fn load(&self) -> Result<StateFile, StateError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No state file at {}, starting empty", self.path.display());
                return Ok(StateFile::default());
            }
            Err(e) => return Err(e.into()),
        };
        let state: StateFile = serde_json::from_str(&content)?;
        if state.version != STATE_FORMAT_VERSION {
            return Err(StateError::UnsupportedVersion(state.version));
        }
        Ok(state)
    }

    /// Writes the file through a temporary sibling that is renamed into
    /// place. The serial is bumped only once the rename succeeded.
    pub async fn save(&self, state: &mut StateFile) -> Result<(), StateError> {
        let next = StateFile {
            serial: state.serial + 1,
            ..state.clone()
        };
        let content = serde_json::to_string_pretty(&next)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        state.serial = next.serial;
        info!(
            "Saved state serial {} with {} resources to {}",
            state.serial,
            state.resources.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}
