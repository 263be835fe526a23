//! Roster SDK: generic resource CRUD backend library.
//!
//! Implement [`EntityStore`] for an entity, wrap it in a
//! [`CrudService`] with a [`CrudConfig`], and [`EntityRouter`] produces
//! the five standard handlers (list, create, read, update, delete) with
//! uniform validation, pagination, and error mapping. Any handler can
//! be replaced and new routes added beside the generated ones.

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ErrorBody, FieldError};
pub use response::{created, success_one, success_page, PageMeta, SuccessBody};
pub use routes::{common_routes_with_ready, EntityRouter, EntityState};
pub use service::{safe_parse, CrudConfig, CrudService, PageParams, DEFAULT_LIMIT, MAX_LIMIT};
pub use settings::Settings;
pub use state::AppState;
pub use store::{EntityStore, StoreError};
