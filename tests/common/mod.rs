//! Shared test fixtures: a Ticket entity over an in-memory store that
//! counts every call, so tests can assert exactly which storage
//! operations ran. Titles are unique, mirroring a unique index.
#![allow(dead_code)]

use async_trait::async_trait;
use roster_sdk::{EntityStore, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use validator::Validate;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub title: String,
    pub severity: u32,
}

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct CreateTicket {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 1, max = 5, message = "severity must be 1-5"))]
    pub severity: u32,
}

#[derive(Deserialize, Validate, Debug, Default)]
pub struct UpdateTicket {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(range(min = 1, max = 5, message = "severity must be 1-5"))]
    pub severity: Option<u32>,
}

#[derive(Default)]
pub struct Calls {
    pub find_page: AtomicUsize,
    pub count: AtomicUsize,
    pub find_by_id: AtomicUsize,
    pub insert: AtomicUsize,
    pub update: AtomicUsize,
    pub delete: AtomicUsize,
}

impl Calls {
    pub fn writes(&self) -> usize {
        self.insert.load(Ordering::SeqCst)
            + self.update.load(Ordering::SeqCst)
            + self.delete.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.writes()
            + self.find_page.load(Ordering::SeqCst)
            + self.count.load(Ordering::SeqCst)
            + self.find_by_id.load(Ordering::SeqCst)
    }
}

pub struct MemTicketStore {
    rows: Mutex<BTreeMap<u64, Ticket>>,
    next_id: AtomicU64,
    pub calls: Calls,
    /// When set, `update` reports the row missing even though the
    /// existence pre-check saw it (a concurrent delete between the two
    /// statements).
    pub vanish_on_update: AtomicBool,
}

impl MemTicketStore {
    pub fn new() -> Self {
        MemTicketStore {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            calls: Calls::default(),
            vanish_on_update: AtomicBool::new(false),
        }
    }

    pub fn row(&self, id: u64) -> Option<Ticket> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl EntityStore for MemTicketStore {
    type Id = u64;
    type Record = Ticket;
    type Create = CreateTicket;
    type Update = UpdateTicket;

    async fn find_page(&self, skip: u64, take: u64) -> Result<Vec<Ticket>, StoreError> {
        self.calls.find_page.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .rev()
            .skip(skip as usize)
            .take(take as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.calls.count.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    async fn find_by_id(&self, id: &u64) -> Result<Option<Ticket>, StoreError> {
        self.calls.find_by_id.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn insert(&self, input: CreateTicket) -> Result<Ticket, StoreError> {
        self.calls.insert.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|t| t.title == input.title) {
            return Err(StoreError::UniqueViolation);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let ticket = Ticket {
            id,
            title: input.title,
            severity: input.severity,
        };
        rows.insert(id, ticket.clone());
        Ok(ticket)
    }

    async fn update(&self, id: &u64, patch: UpdateTicket) -> Result<Ticket, StoreError> {
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        if self.vanish_on_update.load(Ordering::SeqCst) {
            return Err(StoreError::NotFound);
        }
        let mut rows = self.rows.lock().unwrap();
        if let Some(new_title) = &patch.title {
            if rows.values().any(|t| t.id != *id && t.title == *new_title) {
                return Err(StoreError::UniqueViolation);
            }
        }
        let ticket = rows.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(title) = patch.title {
            ticket.title = title;
        }
        if let Some(severity) = patch.severity {
            ticket.severity = severity;
        }
        Ok(ticket.clone())
    }

    async fn delete(&self, id: &u64) -> Result<Ticket, StoreError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .remove(id)
            .ok_or(StoreError::NotFound)
    }
}
