use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::department::RenameRequest;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::store::DepartmentStore;

pub struct RenameDepartmentUseCase {
    store: Arc<DepartmentStore>,
}

impl RenameDepartmentUseCase {
    pub fn new(store: Arc<DepartmentStore>) -> Self {
        Self { store }
    }

    /// Validates the request, then runs one rename pass. Returns whether the
    /// store was actually rewritten. Store errors abort before any write; a
    /// request with an empty name never reaches the file at all.
    pub fn execute(&self, request: &RenameRequest) -> Result<bool> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        info!(
            store = %self.store.path().display(),
            origin = %request.origin,
            target = %request.target,
            "renaming department"
        );
        let updated = self.store.rename(&request.origin, &request.target)?;
        if updated {
            info!("rename complete, store rewritten");
        } else {
            info!("rename complete, no bounded occurrence found");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn use_case(content: &str) -> (tempfile::TempDir, PathBuf, RenameDepartmentUseCase) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        fs::write(&path, content).unwrap();
        let use_case = RenameDepartmentUseCase::new(Arc::new(DepartmentStore::new(path.clone())));
        (dir, path, use_case)
    }

    #[test]
    fn test_rename_updates_store() {
        let (_dir, path, use_case) = use_case("id1,DeptA,x\n");
        let request = RenameRequest::new("DeptA".to_string(), "DeptB".to_string());
        assert!(use_case.execute(&request).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "id1,DeptB,x\r\n");
    }

    #[test]
    fn test_empty_target_rejected_before_file_access() {
        let (_dir, path, use_case) = use_case("id1,DeptA,x\n");
        let request = RenameRequest::new("DeptA".to_string(), String::new());
        let err = use_case.execute(&request).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "id1,DeptA,x\n");
    }

    #[test]
    fn test_missing_store_propagates_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DepartmentStore::new(dir.path().join("absent.txt"));
        let use_case = RenameDepartmentUseCase::new(Arc::new(store));
        let request = RenameRequest::new("DeptA".to_string(), "DeptB".to_string());
        assert!(matches!(
            use_case.execute(&request).unwrap_err(),
            AppError::StoreAccess(_)
        ));
    }
}
