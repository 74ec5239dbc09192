//! Synchronous mirror of [`Factory`](crate::Factory) and [`Images`](crate::Images).
//!
//! Each wrapper owns a current-thread tokio runtime and blocks on the async
//! operation, so contracts and errors are identical to the async API.
//!
//! These types must not be used from inside an async runtime: blocking on
//! a nested runtime panics. Use the async types there instead.
//!
//! ```rust,ignore
//! use prestashop_ws_rest::blocking;
//!
//! let groups = blocking::Factory::groups(client)?;
//! for id in groups.get_ids()? {
//!     println!("{:?}", groups.get(id)?);
//! }
//! ```

use std::sync::Arc;

use bytes::Bytes;
use tokio::runtime::Runtime;

use prestashop_ws_client::{Error, ErrorKind, ImageUpload, PrestaShopClient, Request, Result};

use crate::entities::{Category, Combination, Country, Group};
use crate::entity::{Entity, Resource};
use crate::filter::Filter;

fn runtime() -> Result<Arc<Runtime>> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map(Arc::new)
        .map_err(|e| Error::with_source(ErrorKind::Config(format!("cannot start runtime: {}", e)), e))
}

/// Blocking [`crate::Factory`].
pub struct Factory<T> {
    inner: crate::Factory<T>,
    runtime: Arc<Runtime>,
}

impl<T> Clone for Factory<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            runtime: Arc::clone(&self.runtime),
        }
    }
}

impl<T> std::fmt::Debug for Factory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::Factory")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<T: Entity> Factory<T> {
    pub fn new(client: PrestaShopClient, resource: Resource) -> Result<Self> {
        Self::from_async(crate::Factory::new(client, resource))
    }

    /// Wrap an existing async factory.
    pub fn from_async(inner: crate::Factory<T>) -> Result<Self> {
        Ok(Self {
            inner,
            runtime: runtime()?,
        })
    }

    pub fn resource(&self) -> &Resource {
        self.inner.resource()
    }

    /// Blocking image operations sharing this factory's runtime.
    pub fn images(&self) -> Images {
        Images {
            inner: self.inner.images(),
            runtime: Arc::clone(&self.runtime),
        }
    }

    pub fn get(&self, id: u64) -> Result<T> {
        self.runtime.block_on(self.inner.get(id))
    }

    pub fn add(&self, entity: &T) -> Result<T> {
        self.runtime.block_on(self.inner.add(entity))
    }

    pub fn add_sending_email(&self, entity: &T) -> Result<T> {
        self.runtime.block_on(self.inner.add_sending_email(entity))
    }

    pub fn add_list(&self, entities: &[T]) -> Result<Vec<T>> {
        self.runtime.block_on(self.inner.add_list(entities))
    }

    pub fn update(&self, entity: &T) -> Result<()> {
        self.runtime.block_on(self.inner.update(entity))
    }

    pub fn update_list(&self, entities: &[T]) -> Result<Vec<T>> {
        self.runtime.block_on(self.inner.update_list(entities))
    }

    pub fn delete(&self, id: u64) -> Result<()> {
        self.runtime.block_on(self.inner.delete(id))
    }

    pub fn delete_entity(&self, entity: &T) -> Result<()> {
        self.runtime.block_on(self.inner.delete_entity(entity))
    }

    pub fn get_ids(&self) -> Result<Vec<u64>> {
        self.runtime.block_on(self.inner.get_ids())
    }

    pub fn get_by_filter(&self, filter: &Filter) -> Result<Vec<T>> {
        self.runtime.block_on(self.inner.get_by_filter(filter))
    }

    pub fn get_all(&self) -> Result<Vec<T>> {
        self.runtime.block_on(self.inner.get_all())
    }

    pub fn get_ids_by_filter(&self, filter: &Filter) -> Result<Vec<u64>> {
        self.runtime.block_on(self.inner.get_ids_by_filter(filter))
    }

    pub fn request_for_filter(&self, filter: &Filter) -> Request {
        self.inner.request_for_filter(filter)
    }

    pub fn request_for_ids_by_filter(&self, filter: &Filter) -> Request {
        self.inner.request_for_ids_by_filter(filter)
    }
}

impl Factory<Category> {
    pub fn categories(client: PrestaShopClient) -> Result<Self> {
        Self::from_async(crate::Factory::categories(client))
    }
}

impl Factory<Country> {
    pub fn countries(client: PrestaShopClient) -> Result<Self> {
        Self::from_async(crate::Factory::countries(client))
    }
}

impl Factory<Group> {
    pub fn groups(client: PrestaShopClient) -> Result<Self> {
        Self::from_async(crate::Factory::groups(client))
    }
}

impl Factory<Combination> {
    pub fn combinations(client: PrestaShopClient) -> Result<Self> {
        Self::from_async(crate::Factory::combinations(client))
    }
}

/// Blocking [`crate::Images`].
#[derive(Clone)]
pub struct Images {
    inner: crate::Images,
    runtime: Arc<Runtime>,
}

impl std::fmt::Debug for Images {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::Images")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl Images {
    pub fn new(client: PrestaShopClient, resource: impl Into<String>) -> Result<Self> {
        Ok(Self {
            inner: crate::Images::new(client, resource),
            runtime: runtime()?,
        })
    }

    pub fn add(&self, id: Option<u64>, upload: ImageUpload) -> Result<Option<u64>> {
        self.runtime.block_on(self.inner.add(id, upload))
    }

    pub fn update(&self, id: Option<u64>, upload: ImageUpload) -> Result<Option<u64>> {
        self.runtime.block_on(self.inner.update(id, upload))
    }

    pub fn delete(&self, id: Option<u64>, image_id: Option<u64>) -> Result<()> {
        self.runtime.block_on(self.inner.delete(id, image_id))
    }

    pub fn get(&self, id: u64, image_id: Option<u64>) -> Result<Bytes> {
        self.runtime.block_on(self.inner.get(id, image_id))
    }
}
