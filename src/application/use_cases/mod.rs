pub mod rename_department;
pub mod search_department;

pub use rename_department::RenameDepartmentUseCase;
pub use search_department::SearchDepartmentUseCase;
