//! Entity route composition: the five generated handlers mounted at `/`
//! and `/:id`, with explicit slots for overriding any of them and for
//! adding routes beside them. Replacing a slot replaces it entirely;
//! the last replacement wins.

use crate::handlers::entity;
use crate::service::CrudService;
use crate::store::EntityStore;
use axum::routing::{delete, get, patch, post, MethodRouter};
use axum::Router;
use std::sync::Arc;

pub type EntityState<S> = Arc<CrudService<S>>;

pub struct EntityRouter<S: EntityStore> {
    service: EntityState<S>,
    list: MethodRouter<EntityState<S>>,
    create: MethodRouter<EntityState<S>>,
    read: MethodRouter<EntityState<S>>,
    update: MethodRouter<EntityState<S>>,
    delete: MethodRouter<EntityState<S>>,
    extra: Vec<(String, MethodRouter<EntityState<S>>)>,
}

impl<S: EntityStore> EntityRouter<S> {
    pub fn new(service: CrudService<S>) -> Self {
        Self::with_shared(Arc::new(service))
    }

    /// Build from an already-shared service, for callers that keep a
    /// handle for their custom handlers.
    pub fn with_shared(service: EntityState<S>) -> Self {
        EntityRouter {
            service,
            list: get(entity::list::<S>),
            create: post(entity::create::<S>),
            read: get(entity::read::<S>),
            update: patch(entity::update::<S>),
            delete: delete(entity::delete::<S>),
            extra: Vec::new(),
        }
    }

    pub fn service(&self) -> EntityState<S> {
        self.service.clone()
    }

    /// Replace the generated `GET /` handler.
    pub fn with_list(mut self, route: MethodRouter<EntityState<S>>) -> Self {
        self.list = route;
        self
    }

    /// Replace the generated `POST /` handler.
    pub fn with_create(mut self, route: MethodRouter<EntityState<S>>) -> Self {
        self.create = route;
        self
    }

    /// Replace the generated `GET /:id` handler.
    pub fn with_read(mut self, route: MethodRouter<EntityState<S>>) -> Self {
        self.read = route;
        self
    }

    /// Replace the generated `PATCH /:id` handler.
    pub fn with_update(mut self, route: MethodRouter<EntityState<S>>) -> Self {
        self.update = route;
        self
    }

    /// Replace the generated `DELETE /:id` handler.
    pub fn with_delete(mut self, route: MethodRouter<EntityState<S>>) -> Self {
        self.delete = route;
        self
    }

    /// Add a route beside the generated five, sharing the same state.
    pub fn route(mut self, path: &str, route: MethodRouter<EntityState<S>>) -> Self {
        self.extra.push((path.to_string(), route));
        self
    }

    pub fn build(self) -> Router {
        let mut router = Router::new()
            .route("/", self.list.merge(self.create))
            .route("/:id", self.read.merge(self.update).merge(self.delete));
        for (path, route) in self.extra {
            router = router.route(&path, route);
        }
        router.with_state(self.service)
    }
}
