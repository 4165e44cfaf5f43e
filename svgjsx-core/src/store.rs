use std::{
    cell::RefCell,
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Access to the place where source and generated files live.
///
/// The conversion never touches the disk directly; everything goes through
/// this trait so hosts can substitute their own storage.
pub trait FileStore {
    /// Check whether a file exists at `path`.
    fn exists(&self, path: &Path) -> Result<bool>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write `contents` to `path`, replacing any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Remove the file at `path`.
    fn remove(&self, path: &Path) -> Result<()>;
}

/// File store backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FileStore for FsStore {
    fn exists(&self, path: &Path) -> Result<bool> {
        path.try_exists().map_err(|e| Error::io("check", path, e))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| Error::io("read", path, e))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io("create", parent, e))?;
        }
        std::fs::write(path, contents).map_err(|e| Error::io("write", path, e))
    }

    fn remove(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path).map_err(|e| Error::io("remove", path, e))
    }
}

/// In-memory file store.
///
/// Used by tests and dry runs; paths are compared verbatim.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.borrow_mut().insert(path.into(), contents.into());
        self
    }

    /// Get the contents of a file, if present.
    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    /// All stored paths in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

fn not_found(action: &'static str, path: &Path) -> Error {
    Error::io(action, path, io::Error::from(io::ErrorKind::NotFound))
}

impl FileStore for MemoryStore {
    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(self.files.borrow().contains_key(path))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let files = self.files.borrow();
        let bytes = files.get(path).ok_or_else(|| not_found("read", path))?;
        String::from_utf8(bytes.clone())
            .map_err(|e| Error::io("read", path, io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<()> {
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found("remove", path))
    }
}
