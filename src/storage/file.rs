//! File-backed storage

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::{Storage, StorageError, validate_key};

/// Storage keeping one `<key>.json` file per slot inside a directory.
///
/// Writes land in a temporary sibling first and are renamed into place, so a reader never
/// sees a half-written record.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();

        fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    /// Directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let staging = self.dir.join(format!(".{key}.json.tmp"));

        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn open_creates_missing_directory() -> TestResult {
        let root = tempfile::tempdir()?;
        let dir = root.path().join("nested").join("slots");

        let storage = FileStorage::open(&dir)?;

        assert!(storage.dir().is_dir());

        Ok(())
    }

    #[test]
    fn values_survive_reopen() -> TestResult {
        let dir = tempfile::tempdir()?;

        FileStorage::open(dir.path())?.set("cart", r#"[{"id":"a"}]"#)?;

        let reopened = FileStorage::open(dir.path())?;

        assert_eq!(reopened.get("cart")?.as_deref(), Some(r#"[{"id":"a"}]"#));

        Ok(())
    }

    #[test]
    fn set_leaves_no_staging_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut storage = FileStorage::open(dir.path())?;

        storage.set("cart", "[]")?;
        storage.set("cart", "[1]")?;

        let names: Vec<_> = fs::read_dir(dir.path())?
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["cart.json"]);

        Ok(())
    }

    #[test]
    fn remove_deletes_file_and_tolerates_missing() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut storage = FileStorage::open(dir.path())?;

        storage.set("cart", "[]")?;
        storage.remove("cart")?;
        storage.remove("cart")?;

        assert!(!dir.path().join("cart.json").exists());
        assert_eq!(storage.get("cart")?, None);

        Ok(())
    }

    #[test]
    fn rejects_path_traversal_keys() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut storage = FileStorage::open(dir.path())?;

        assert!(matches!(
            storage.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));

        Ok(())
    }
}
