//! Generic CRUD execution over an entity store.

use crate::error::AppError;
use crate::response::PageMeta;
use crate::service::validation::safe_parse;
use crate::store::{EntityStore, StoreError};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 1000;

/// Immutable per-entity configuration, constructed once at startup.
/// Independent instances share no state.
#[derive(Clone, Debug)]
pub struct CrudConfig {
    /// Display name used in error messages (e.g. "Job").
    pub entity: &'static str,
    pub default_limit: u64,
    pub max_limit: u64,
}

impl CrudConfig {
    pub fn new(entity: &'static str) -> Self {
        CrudConfig {
            entity,
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }

    pub fn with_limits(mut self, default_limit: u64, max_limit: u64) -> Self {
        self.default_limit = default_limit;
        self.max_limit = max_limit;
        self
    }
}

/// Raw pagination query parameters. Kept as strings so malformed values
/// fall back to defaults instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    /// `page` floors at 1 when absent or not a positive integer.
    /// `limit` falls back to the configured default when absent or not a
    /// positive integer, then clamps to the configured maximum.
    pub fn resolve(&self, config: &CrudConfig) -> (u64, u64) {
        let page = match self.page.as_deref().map(str::parse::<u64>) {
            Some(Ok(p)) if p >= 1 => p,
            _ => 1,
        };
        let limit = match self.limit.as_deref().map(str::parse::<u64>) {
            Some(Ok(l)) if l >= 1 => l.min(config.max_limit),
            _ => config.default_limit,
        };
        (page, limit)
    }
}

/// The five standard operations for one entity, with uniform
/// validation, pagination, and error mapping. Stateless: every call
/// goes straight to the store.
pub struct CrudService<S: EntityStore> {
    store: S,
    config: CrudConfig,
}

impl<S: EntityStore> CrudService<S> {
    pub fn new(store: S, config: CrudConfig) -> Self {
        CrudService { store, config }
    }

    pub fn config(&self) -> &CrudConfig {
        &self.config
    }

    /// Direct store access for handlers layered on top of the generated
    /// five.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse a path id. An unparsable id is a 400, before any storage
    /// access.
    pub fn parse_id(&self, raw: &str) -> Result<S::Id, AppError> {
        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("invalid {} id", self.config.entity)))
    }

    /// One page ordered by id descending, plus an independent unfiltered
    /// count. The two reads are not transactional; the total can be
    /// stale relative to the page under concurrent writes.
    pub async fn list(&self, params: &PageParams) -> Result<(Vec<S::Record>, PageMeta), AppError> {
        let (page, limit) = params.resolve(&self.config);
        let skip = (page - 1).saturating_mul(limit);
        tracing::debug!(entity = self.config.entity, page, limit, "list");
        let records = self
            .store
            .find_page(skip, limit)
            .await
            .map_err(|e| self.storage_error("list", e))?;
        let total = self
            .store
            .count()
            .await
            .map_err(|e| self.storage_error("count", e))?;
        Ok((records, PageMeta::new(total, page, limit)))
    }

    pub async fn get(&self, id: &S::Id) -> Result<S::Record, AppError> {
        tracing::debug!(entity = self.config.entity, "read");
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| self.storage_error("read", e))?
            .ok_or_else(|| self.not_found())
    }

    /// Validate, then persist verbatim. A rejected body never reaches
    /// the store.
    pub async fn create(&self, body: Value) -> Result<S::Record, AppError> {
        let input: S::Create = safe_parse(self.config.entity, body)?;
        tracing::debug!(entity = self.config.entity, "create");
        self.store
            .insert(input)
            .await
            .map_err(|e| self.write_error("create", e))
    }

    /// Existence is checked before the write so a missing row reports
    /// the same 404 as a read. The row can still vanish between check
    /// and write; the store's not-found outcome maps to the same 404.
    pub async fn update(&self, id: &S::Id, body: Value) -> Result<S::Record, AppError> {
        let patch: S::Update = safe_parse(self.config.entity, body)?;
        let existing = self
            .store
            .find_by_id(id)
            .await
            .map_err(|e| self.storage_error("read", e))?;
        if existing.is_none() {
            return Err(self.not_found());
        }
        tracing::debug!(entity = self.config.entity, "update");
        self.store
            .update(id, patch)
            .await
            .map_err(|e| self.write_error("update", e))
    }

    /// Deletes directly, no pre-check; returns the record as it was
    /// before deletion.
    pub async fn delete(&self, id: &S::Id) -> Result<S::Record, AppError> {
        tracing::debug!(entity = self.config.entity, "delete");
        match self.store.delete(id).await {
            Ok(record) => Ok(record),
            Err(StoreError::NotFound) => Err(self.not_found()),
            Err(e) => Err(self.storage_error("delete", e)),
        }
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(format!("{} not found", self.config.entity))
    }

    /// Constraint outcomes map to HTTP semantics; anything else is
    /// logged and reported as a generic failure naming the entity.
    fn write_error(&self, op: &'static str, err: StoreError) -> AppError {
        match err {
            StoreError::UniqueViolation => {
                AppError::Conflict(format!("{} already exists", self.config.entity))
            }
            StoreError::ForeignKeyViolation => AppError::NotFound(format!(
                "related record for {} not found",
                self.config.entity
            )),
            StoreError::NotFound => self.not_found(),
            StoreError::Other(_) => self.storage_error(op, err),
        }
    }

    fn storage_error(&self, op: &'static str, err: StoreError) -> AppError {
        tracing::error!(entity = self.config.entity, op, error = %err, "storage failure");
        AppError::Internal(format!("failed to {} {}", op, self.config.entity))
    }
}
