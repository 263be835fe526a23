//! Data-access abstraction: one store per entity, a closed set of
//! storage outcomes. Driver-specific failures are translated into
//! [`StoreError`] at the backend boundary so the CRUD layer stays
//! driver-agnostic.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

pub mod postgres;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violated")]
    UniqueViolation,
    #[error("referenced record not found")]
    ForeignKeyViolation,
    #[error("record not found")]
    NotFound,
    #[error("storage: {0}")]
    Other(String),
}

/// One entity's data-access handle.
///
/// `find_page` returns records ordered by the id column descending.
/// Writes return the affected record; `delete` returns the record as it
/// was before deletion. `update` and `delete` report a missing row as
/// `Err(StoreError::NotFound)` rather than succeeding silently.
#[async_trait]
pub trait EntityStore: Send + Sync + 'static {
    type Id: FromStr + Send + Sync;
    type Record: Serialize + Send;
    type Create: DeserializeOwned + Validate + Send;
    type Update: DeserializeOwned + Validate + Send;

    async fn find_page(&self, skip: u64, take: u64) -> Result<Vec<Self::Record>, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    async fn find_by_id(&self, id: &Self::Id) -> Result<Option<Self::Record>, StoreError>;

    async fn insert(&self, input: Self::Create) -> Result<Self::Record, StoreError>;

    /// The row may disappear between a caller's existence check and this
    /// write; that surfaces here as `Err(StoreError::NotFound)`.
    async fn update(&self, id: &Self::Id, patch: Self::Update) -> Result<Self::Record, StoreError>;

    async fn delete(&self, id: &Self::Id) -> Result<Self::Record, StoreError>;
}
