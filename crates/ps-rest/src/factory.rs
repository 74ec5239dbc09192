//! Generic CRUD factory bound to one resource.

use std::marker::PhantomData;

use serde::Deserialize;
use tracing::{debug, instrument};

use prestashop_ws_client::{display_value, xml, Error, PrestaShopClient, Request, Result};

use crate::entity::{Entity, Resource};
use crate::filter::Filter;
use crate::images::Images;

/// Typed CRUD access to one web service resource.
///
/// A factory is plain configuration: the shared client plus the resource
/// names. Every method is a single request/response exchange (two for the
/// `add` family) with no retry; clones can be used concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use prestashop_ws_rest::{Factory, Filter, Resource};
///
/// let categories: Factory<Category> = Factory::new(client, Resource::CATEGORIES);
///
/// let created = categories.add(&new_category).await?;
/// let apples = categories
///     .get_by_filter(&Filter::new().field("name", "Apple"))
///     .await?;
/// categories.delete(created.id.unwrap()).await?;
/// ```
pub struct Factory<T> {
    client: PrestaShopClient,
    resource: Resource,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Factory<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource: self.resource.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Factory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("client", &self.client)
            .field("resource", &self.resource)
            .finish()
    }
}

/// Just the id of a listed element.
#[derive(Debug, Deserialize)]
pub(crate) struct IdOnly {
    #[serde(default)]
    id: Option<String>,
}

impl IdOnly {
    /// `None` for a missing or blank id.
    pub(crate) fn parse(&self) -> Result<Option<u64>> {
        match self.id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| Error::malformed(format!("non-numeric id {:?}", raw))),
        }
    }
}

impl<T: Entity> Factory<T> {
    /// Create a factory for `resource` over `client`.
    pub fn new(client: PrestaShopClient, resource: Resource) -> Self {
        Self {
            client,
            resource,
            _entity: PhantomData,
        }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn client(&self) -> &PrestaShopClient {
        &self.client
    }

    /// Image operations for this resource (`images/<plural>/<id>`).
    pub fn images(&self) -> Images {
        Images::new(self.client.clone(), self.resource.plural().to_string())
    }

    fn fragment(&self, entity: &T) -> Result<String> {
        xml::to_fragment(self.resource.singular(), entity)
    }

    /// Serialized copy of `entity` without its id.
    fn draft_fragment(&self, entity: &T) -> Result<String> {
        let mut draft = entity.clone();
        draft.set_id(None);
        self.fragment(&draft)
    }

    /// Get one entity by id.
    #[instrument(skip(self), fields(resource = %self.resource))]
    pub async fn get(&self, id: u64) -> Result<T> {
        let request = Request::for_get(self.resource.plural(), Some(id), self.resource.singular());
        self.client.execute_entity(&request).await
    }

    /// Create an entity and return the server's full representation.
    ///
    /// Any id on `entity` is left out of the payload. The creation response
    /// only supplies the new id; the returned value comes from a second
    /// `get` with that id.
    #[instrument(skip(self, entity), fields(resource = %self.resource))]
    pub async fn add(&self, entity: &T) -> Result<T> {
        let request = Request::for_add(self.resource.plural(), &[self.draft_fragment(entity)?])
            .root_element(self.resource.singular());
        self.echo(&request).await
    }

    /// Create an entity through the order-history request, which makes the
    /// shop email the customer. Echoes like [`add`](Self::add).
    #[instrument(skip(self, entity), fields(resource = %self.resource))]
    pub async fn add_sending_email(&self, entity: &T) -> Result<T> {
        let request =
            Request::for_add_order_history(self.resource.plural(), &[self.draft_fragment(entity)?])
                .root_element(self.resource.singular());
        self.echo(&request).await
    }

    async fn echo(&self, request: &Request) -> Result<T> {
        let created: IdOnly = self.client.execute_entity(request).await?;
        let id = created.parse()?.ok_or_else(|| {
            Error::malformed(format!(
                "created <{}> carries no id",
                self.resource.singular()
            ))
        })?;
        debug!(id, "Created, reading back");
        self.get(id).await
    }

    /// Create several entities in one request.
    ///
    /// Inputs are not modified; ids are dropped from the payload copies. The
    /// entities the service returns are handed back as-is.
    #[instrument(skip(self, entities), fields(resource = %self.resource, count = entities.len()))]
    pub async fn add_list(&self, entities: &[T]) -> Result<Vec<T>> {
        let fragments = entities
            .iter()
            .map(|e| self.draft_fragment(e))
            .collect::<Result<Vec<_>>>()?;
        let request = Request::for_add(self.resource.plural(), &fragments);
        self.client
            .execute_list(&request, self.resource.singular())
            .await
    }

    /// Replace the full state of an existing entity.
    #[instrument(skip(self, entity), fields(resource = %self.resource, id = ?entity.id()))]
    pub async fn update(&self, entity: &T) -> Result<()> {
        let request =
            Request::for_update(self.resource.plural(), entity.id(), &self.fragment(entity)?)?;
        self.client.execute(&request).await?;
        Ok(())
    }

    /// Update several entities in one request and return what the service
    /// sent back.
    #[instrument(skip(self, entities), fields(resource = %self.resource, count = entities.len()))]
    pub async fn update_list(&self, entities: &[T]) -> Result<Vec<T>> {
        let fragments = entities
            .iter()
            .map(|e| self.fragment(e))
            .collect::<Result<Vec<_>>>()?;
        let request = Request::for_update_list(self.resource.plural(), &fragments);
        self.client
            .execute_list(&request, self.resource.singular())
            .await
    }

    /// Delete an entity by id.
    #[instrument(skip(self), fields(resource = %self.resource))]
    pub async fn delete(&self, id: u64) -> Result<()> {
        let request = Request::for_delete(self.resource.plural(), Some(id))?;
        self.client.execute(&request).await?;
        Ok(())
    }

    /// Delete the remote copy of `entity`; fails without a request if it
    /// has no id.
    pub async fn delete_entity(&self, entity: &T) -> Result<()> {
        let id = entity.id().ok_or_else(|| Error::missing_identifier("delete"))?;
        self.delete(id).await
    }

    /// Ids of every entity, without fetching the entities.
    #[instrument(skip(self), fields(resource = %self.resource))]
    pub async fn get_ids(&self) -> Result<Vec<u64>> {
        let request = Request::for_get(self.resource.plural(), None, xml::ENVELOPE);
        self.client
            .execute_for_ids(&request, self.resource.singular())
            .await
    }

    /// The request [`get_by_filter`](Self::get_by_filter) sends.
    pub fn request_for_filter(&self, filter: &Filter) -> Request {
        let display = display_value(filter.display.as_slice());
        Request::for_filter(
            self.resource.plural(),
            Some(display.as_str()),
            &filter.fields,
            filter.sort.as_deref(),
            filter.limit.as_deref(),
            self.resource.plural(),
        )
    }

    /// The request [`get_all`](Self::get_all) sends.
    pub fn request_for_all(&self) -> Request {
        self.request_for_filter(&Filter::default())
    }

    /// The request [`get_ids_by_filter`](Self::get_ids_by_filter) sends.
    pub fn request_for_ids_by_filter(&self, filter: &Filter) -> Request {
        Request::for_filter(
            self.resource.plural(),
            Some("[id]"),
            &filter.fields,
            filter.sort.as_deref(),
            filter.limit.as_deref(),
            self.resource.plural(),
        )
    }

    /// Entities matching `filter`, in the order the service returns them.
    #[instrument(skip(self, filter), fields(resource = %self.resource))]
    pub async fn get_by_filter(&self, filter: &Filter) -> Result<Vec<T>> {
        let request = self.request_for_filter(filter);
        self.client
            .execute_list(&request, self.resource.singular())
            .await
    }

    /// Every entity with every field.
    pub async fn get_all(&self) -> Result<Vec<T>> {
        self.get_by_filter(&Filter::default()).await
    }

    /// Ids of the entities matching `filter`, in service order.
    ///
    /// Only the `id` field is requested; the filter's display list is
    /// ignored. Entities without an id are skipped.
    #[instrument(skip(self, filter), fields(resource = %self.resource))]
    pub async fn get_ids_by_filter(&self, filter: &Filter) -> Result<Vec<u64>> {
        let request = self.request_for_ids_by_filter(filter);
        let listed: Vec<IdOnly> = self
            .client
            .execute_list(&request, self.resource.singular())
            .await?;

        let mut ids = Vec::with_capacity(listed.len());
        for entry in &listed {
            if let Some(id) = entry.parse()? {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
