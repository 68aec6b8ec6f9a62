mod matcher;
mod rewriter;
mod scanner;

pub use matcher::Matcher;
pub use rewriter::rewrite;

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::domain::error::{AppError, Result};

/// Fixed store file name, always resolved next to the running executable.
/// External tooling assumes this location, so it is deliberately not
/// configurable.
pub const STORE_FILENAME: &str = "test.txt";

pub fn resolve_store_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| AppError::StoreAccess(format!("cannot resolve executable path: {}", e)))?;
    let dir = exe
        .parent()
        .ok_or_else(|| AppError::StoreAccess("executable has no parent directory".to_string()))?;
    Ok(dir.join(STORE_FILENAME))
}

/// The flat-file department store.
///
/// The lock serializes passes over the file: lookups share a read guard,
/// while a rename holds the write guard across its whole read-then-write
/// cycle so two renames can never interleave and a lookup can never observe
/// a half-written file. All I/O under the lock is synchronous, so no guard
/// is ever held across an await point.
pub struct DepartmentStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl DepartmentStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: RwLock::new(()),
        }
    }

    /// Store beside the executable. The file itself may not exist yet; each
    /// pass reports that as a store-access error.
    pub fn at_executable_dir() -> Result<Self> {
        Ok(Self::new(resolve_store_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn find(&self, value: &str) -> Result<bool> {
        let _guard = self
            .lock
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        scanner::find(&self.path, value)
    }

    pub fn rename(&self, origin: &str, target: &str) -> Result<bool> {
        let _guard = self
            .lock
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        scanner::rename(&self.path, origin, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_store_find_and_rename_through_lock() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        fs::write(&path, "id1,DeptA,x\n").unwrap();

        let store = DepartmentStore::new(path.clone());
        assert!(store.find("DeptA").unwrap());
        assert!(store.rename("DeptA", "DeptB").unwrap());
        assert!(!store.find("DeptA").unwrap());
        assert!(store.find("DeptB").unwrap());
    }

    #[test]
    fn test_poisoned_lock_surfaces_as_error_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        fs::write(&path, "id1,DeptA,x\n").unwrap();

        let store = std::sync::Arc::new(DepartmentStore::new(path.clone()));
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock.write().unwrap();
            panic!("poison the store lock");
        })
        .join();

        assert!(matches!(
            store.find("DeptA").unwrap_err(),
            AppError::Internal(_)
        ));
        assert!(matches!(
            store.rename("DeptA", "DeptB").unwrap_err(),
            AppError::Internal(_)
        ));
        // The pass never started, so the file is untouched.
        assert_eq!(fs::read_to_string(&path).unwrap(), "id1,DeptA,x\n");
    }
}
