use crate::error::LegacyError;
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Where the serialized catalog document lives between sessions.
pub trait DocumentStorage {
    /// `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>, LegacyError>;
    fn write(&self, contents: &str) -> Result<(), LegacyError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(contents.into())),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, LegacyError> {
        self.slot
            .lock()
            .map_err(|_| LegacyError::Storage(io::Error::other("storage lock poisoned")))
    }
}

impl DocumentStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, LegacyError> {
        Ok(self.lock()?.clone())
    }

    fn write(&self, contents: &str) -> Result<(), LegacyError> {
        *self.lock()? = Some(contents.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, LegacyError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> Result<(), LegacyError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl<S: DocumentStorage + ?Sized> DocumentStorage for &S {
    fn read(&self) -> Result<Option<String>, LegacyError> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> Result<(), LegacyError> {
        (**self).write(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_starts_empty() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read().unwrap(), None);

        storage.write("{}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn missing_file_reads_as_nothing_saved() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested/catalog.json"));

        assert_eq!(storage.read().unwrap(), None);
        storage.write("[]").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("[]"));
    }
}
