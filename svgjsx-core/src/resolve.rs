//! Collision-free target paths.

use std::path::{Path, PathBuf};

use crate::{Error, FileStore, Result};

/// Highest numeric suffix tried before giving up.
pub const MAX_SUFFIX: u32 = 10_000;

/// Find a path near `candidate` that does not exist in `store`.
///
/// Returns `candidate` itself when it is free. Otherwise trailing digits are
/// trimmed from the file stem and numeric suffixes are tried in order
/// (`Icon.tsx` -> `Icon1.tsx`, `Icon2.tsx`, ...) until one is free.
///
/// The path is only known to be free at the moment it is checked; nothing is
/// created or locked, so the caller should write promptly.
pub fn resolve_distinct_path(candidate: &Path, store: &dyn FileStore) -> Result<PathBuf> {
    if !store.exists(candidate)? {
        tracing::debug!(path = %candidate.display(), "target path is free");
        return Ok(candidate.to_path_buf());
    }

    let stem = candidate
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let base = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let extension = candidate
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    for suffix in 1..=MAX_SUFFIX {
        let path = candidate.with_file_name(format!("{}{}{}", base, suffix, extension));
        if !store.exists(&path)? {
            tracing::debug!(path = %path.display(), suffix, "resolved distinct target path");
            return Ok(path);
        }
        tracing::trace!(path = %path.display(), "target path taken");
    }

    Err(Error::NoDistinctPath {
        candidate: candidate.to_path_buf(),
        attempts: MAX_SUFFIX,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_free_candidate_is_unchanged() {
        let store = MemoryStore::new();
        let candidate = Path::new("/icons/Unique.jsx");

        assert_eq!(
            resolve_distinct_path(candidate, &store).unwrap(),
            PathBuf::from("/icons/Unique.jsx")
        );
    }

    #[test]
    fn test_existing_candidate_gets_suffix() {
        let store = MemoryStore::new().with_file("/icons/Existing.tsx", "");

        assert_eq!(
            resolve_distinct_path(Path::new("/icons/Existing.tsx"), &store).unwrap(),
            PathBuf::from("/icons/Existing1.tsx")
        );
    }

    #[test]
    fn test_skips_taken_suffixes() {
        let store = MemoryStore::new()
            .with_file("/icons/Existing.tsx", "")
            .with_file("/icons/Existing1.tsx", "");

        assert_eq!(
            resolve_distinct_path(Path::new("/icons/Existing.tsx"), &store).unwrap(),
            PathBuf::from("/icons/Existing2.tsx")
        );
    }

    #[test]
    fn test_trailing_digits_are_replaced() {
        let store = MemoryStore::new()
            .with_file("/icons/Icon2.jsx", "")
            .with_file("/icons/Icon1.jsx", "");

        assert_eq!(
            resolve_distinct_path(Path::new("/icons/Icon2.jsx"), &store).unwrap(),
            PathBuf::from("/icons/Icon3.jsx")
        );
    }

    #[test]
    fn test_relative_candidate() {
        let store = MemoryStore::new().with_file("Logo.jsx", "");

        assert_eq!(
            resolve_distinct_path(Path::new("Logo.jsx"), &store).unwrap(),
            PathBuf::from("Logo1.jsx")
        );
    }

    /// Store that reports every path as taken and counts lookups.
    struct FullStore {
        lookups: Cell<u32>,
    }

    impl FileStore for FullStore {
        fn exists(&self, _path: &Path) -> Result<bool> {
            self.lookups.set(self.lookups.get() + 1);
            Ok(true)
        }

        fn read_to_string(&self, _path: &Path) -> Result<String> {
            unimplemented!()
        }

        fn write(&self, _path: &Path, _contents: &[u8]) -> Result<()> {
            unimplemented!()
        }

        fn remove(&self, _path: &Path) -> Result<()> {
            unimplemented!()
        }
    }

    #[test]
    fn test_gives_up_after_max_suffix() {
        let store = FullStore {
            lookups: Cell::new(0),
        };

        let err = resolve_distinct_path(Path::new("/icons/Icon.jsx"), &store).unwrap_err();

        assert!(matches!(err, Error::NoDistinctPath { attempts: MAX_SUFFIX, .. }));
        assert_eq!(store.lookups.get(), MAX_SUFFIX + 1);
    }

    #[test]
    fn test_store_errors_propagate() {
        struct BrokenStore;

        impl FileStore for BrokenStore {
            fn exists(&self, path: &Path) -> Result<bool> {
                Err(Error::io(
                    "check",
                    path,
                    std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                ))
            }

            fn read_to_string(&self, _path: &Path) -> Result<String> {
                unimplemented!()
            }

            fn write(&self, _path: &Path, _contents: &[u8]) -> Result<()> {
                unimplemented!()
            }

            fn remove(&self, _path: &Path) -> Result<()> {
                unimplemented!()
            }
        }

        let err = resolve_distinct_path(Path::new("Icon.jsx"), &BrokenStore).unwrap_err();
        assert!(matches!(err, Error::Io { action: "check", .. }));
    }
}
