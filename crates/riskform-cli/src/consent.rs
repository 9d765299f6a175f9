//! File-backed consent store.
//!
//! The research disclaimer must be acknowledged once per user; the flag
//! is a marker file under the platform config directory, mirroring the
//! one-time gate the core's `ConsentStore` capability models.

use std::fs;
use std::io;
use std::path::PathBuf;

use riskform_core::consent::ConsentStore;

pub struct FileConsentStore {
    path: PathBuf,
}

impl FileConsentStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Marker file under `<config dir>/riskform/`. `None` when the
    /// platform has no resolvable config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("riskform").join("consent_accepted"))
    }
}

impl ConsentStore for FileConsentStore {
    fn get(&self) -> bool {
        self.path.exists()
    }

    fn set(&mut self, accepted: bool) -> io::Result<()> {
        if accepted {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, "accepted\n")
        } else if self.path.exists() {
            fs::remove_file(&self.path)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileConsentStore::new(dir.path().join("nested").join("consent_accepted"));
        assert!(!store.get());

        store.set(true).unwrap();
        assert!(store.get());

        store.set(false).unwrap();
        assert!(!store.get());
    }

    #[test]
    fn revoking_unset_consent_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileConsentStore::new(dir.path().join("consent_accepted"));
        store.set(false).unwrap();
        assert!(!store.get());
    }
}
