use std::sync::Arc;

use tracing::info;

use crate::domain::error::Result;
use crate::infrastructure::store::DepartmentStore;

pub struct SearchDepartmentUseCase {
    store: Arc<DepartmentStore>,
}

impl SearchDepartmentUseCase {
    pub fn new(store: Arc<DepartmentStore>) -> Self {
        Self { store }
    }

    /// One lookup pass: does the store hold `department` as a bounded value?
    pub fn execute(&self, department: &str) -> Result<bool> {
        info!(
            store = %self.store.path().display(),
            department,
            "scanning store for department"
        );
        self.store.find(department)
    }
}
