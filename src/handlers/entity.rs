//! Generated entity handlers: list, create, read, update, delete.
//! Each is a single request/response cycle over the shared
//! [`CrudService`]; no cross-request state.

use crate::error::AppError;
use crate::response::{created, success_one, success_page};
use crate::service::{CrudService, PageParams};
use crate::store::EntityStore;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

pub async fn list<S: EntityStore>(
    State(service): State<Arc<CrudService<S>>>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let (records, meta) = service.list(&params).await?;
    Ok(success_page(records, meta))
}

pub async fn create<S: EntityStore>(
    State(service): State<Arc<CrudService<S>>>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let record = service.create(body).await?;
    Ok(created(record))
}

pub async fn read<S: EntityStore>(
    State(service): State<Arc<CrudService<S>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = service.parse_id(&id)?;
    let record = service.get(&id).await?;
    Ok(success_one(record))
}

pub async fn update<S: EntityStore>(
    State(service): State<Arc<CrudService<S>>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let id = service.parse_id(&id)?;
    let record = service.update(&id, body).await?;
    Ok(success_one(record))
}

pub async fn delete<S: EntityStore>(
    State(service): State<Arc<CrudService<S>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = service.parse_id(&id)?;
    let prior = service.delete(&id).await?;
    Ok(success_one(prior))
}
