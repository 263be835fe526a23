//! Shared state for the common routes. Per-entity CRUD state is the
//! service handle itself; there is no global entity registry.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
