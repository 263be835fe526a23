pub mod crud;
pub mod validation;

pub use crud::{CrudConfig, CrudService, PageParams, DEFAULT_LIMIT, MAX_LIMIT};
pub use validation::{field_errors, safe_parse};
