use std::collections::HashMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// String key/value area backing the persistence slot.
pub trait Storage {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// One file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct DirStorage {
    dir: PathBuf,
}

impl DirStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for DirStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// In-process storage. `read_only` rejects every write, standing in for
/// an unavailable or full backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self {
            entries: HashMap::new(),
            read_only: true,
        }
    }

    fn check_writable(&self) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                ErrorKind::PermissionDenied,
                "storage is read-only",
            ));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.check_writable()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.check_writable()?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dir_storage_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let mut storage = DirStorage::new(tmp.path().join("nested"));

        assert_eq!(storage.get("dietPlan").unwrap(), None);

        storage.set("dietPlan", "{}").unwrap();
        assert_eq!(storage.get("dietPlan").unwrap().as_deref(), Some("{}"));

        storage.remove("dietPlan").unwrap();
        assert_eq!(storage.get("dietPlan").unwrap(), None);
    }

    #[test]
    fn test_dir_storage_remove_missing_is_ok() {
        let tmp = TempDir::new().unwrap();
        let mut storage = DirStorage::new(tmp.path());
        assert!(storage.remove("dietPlanSummary").is_ok());
    }

    #[test]
    fn test_dir_storage_write_fails_when_dir_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut storage = DirStorage::new(file.path());
        assert!(storage.set("dietPlan", "{}").is_err());
    }

    #[test]
    fn test_memory_storage_read_only() {
        let mut storage = MemoryStorage::read_only();
        assert!(storage.set("dietPlan", "{}").is_err());
        assert_eq!(storage.get("dietPlan").unwrap(), None);
    }
}
