pub mod department;
pub mod error;
