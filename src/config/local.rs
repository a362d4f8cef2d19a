use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

/// Filesystem adapter rooted at the destination directory. Writes truncate
/// and replace the target file; the handle is closed and flushed before
/// `write_file` returns, so a failed run never leaves a partial file behind
/// a successful return.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::read(&full_path).map_err(|e| ConvertError::io(&full_path, e))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
        }

        fs::write(&full_path, data).map_err(|e| ConvertError::io(&full_path, e))
    }
}
