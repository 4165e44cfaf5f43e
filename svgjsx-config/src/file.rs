use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG, Error, Result};

/// An svgjsx.toml file with both raw content and parsed config.
#[derive(Debug)]
pub struct SvgjsxToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl SvgjsxToml {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content =
            std::fs::read_to_string(&path).map_err(|e| Error::io("read", &path, e))?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;
        tracing::debug!(path = %path.display(), "loaded config");

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open `svgjsx.toml` in `dir` if there is one.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        match std::fs::metadata(&path) {
            Ok(_) => Self::open(path).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(None)
            }
            Err(e) => Err(Error::io("read", path, e)),
        }
    }

    /// Write the default config to `path`, refusing to replace an existing
    /// file unless `force` is set.
    pub fn create(path: impl AsRef<Path>, force: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !force && path.exists() {
            return Err(Box::new(Error::AlreadyExists { path }));
        }

        std::fs::write(&path, DEFAULT_CONFIG).map_err(|e| Error::io("write", &path, e))?;
        tracing::info!(path = %path.display(), "wrote default config");

        Ok(Self {
            path,
            content: DEFAULT_CONFIG.to_string(),
            config: Config::default(),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_without_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SvgjsxToml::discover(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[convert]\ndelete_source = true\n",
        )
        .unwrap();

        let file = SvgjsxToml::discover(dir.path()).unwrap().unwrap();

        assert!(file.config().convert.delete_source);
        assert_eq!(file.path(), dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SvgjsxToml::open(dir.path().join("other.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { action: "read", .. }));
    }

    #[test]
    fn test_open_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[template]\nindent = 5\n").unwrap();

        let err = SvgjsxToml::open(&path).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_create_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let created = SvgjsxToml::create(&path, false).unwrap();
        assert_eq!(created.content(), DEFAULT_CONFIG);

        let reopened = SvgjsxToml::open(&path).unwrap();
        assert_eq!(reopened.into_config(), Config::default());
    }

    #[test]
    fn test_create_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine\n").unwrap();

        let err = SvgjsxToml::create(&path, false).unwrap_err();
        assert!(matches!(*err, Error::AlreadyExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        SvgjsxToml::create(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
