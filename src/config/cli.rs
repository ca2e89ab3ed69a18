use crate::core::Storage;
use crate::utils::error::{Result, ZooError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads data files from disk, relative to `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);

        fs::read(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ZooError::FileNotFound {
                path: path.to_string(),
            },
            _ => ZooError::IoError(e),
        })
    }
}
