//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBody<T> {
    pub success: bool,
    pub status_code: u16,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

/// Paging metadata for list responses. `total` is the count of all
/// matching records, not just the returned page.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PageMeta {
    /// `total_pages` is `ceil(total / limit)`.
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };
        PageMeta {
            total,
            page,
            limit,
            total_pages,
        }
    }
}

pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<SuccessBody<T>>) {
    (
        StatusCode::OK,
        Json(SuccessBody {
            success: true,
            status_code: StatusCode::OK.as_u16(),
            data,
            meta: None,
        }),
    )
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<SuccessBody<T>>) {
    (
        StatusCode::CREATED,
        Json(SuccessBody {
            success: true,
            status_code: StatusCode::CREATED.as_u16(),
            data,
            meta: None,
        }),
    )
}

pub fn success_page<T: Serialize>(
    data: Vec<T>,
    meta: PageMeta,
) -> (StatusCode, Json<SuccessBody<Vec<T>>>) {
    (
        StatusCode::OK,
        Json(SuccessBody {
            success: true,
            status_code: StatusCode::OK.as_u16(),
            data,
            meta: Some(meta),
        }),
    )
}
