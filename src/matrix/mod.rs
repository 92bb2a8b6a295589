//! Matrix expansion, reshaping, validation, and the last-result store

pub mod expand;
pub mod store;
pub mod table;
pub mod validate;

pub use expand::expand;
pub use store::{GeneratedMatrix, ResultStore};
pub use table::{copy_list, export_filename, flatten, pivot, MatrixTable};
pub use validate::{validate, DuplicateGroup, ValidationReport};
