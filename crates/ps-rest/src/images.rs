//! Image upload, replacement, removal and download.

use bytes::Bytes;
use tracing::{debug, instrument};

use prestashop_ws_client::{xml, ImageUpload, PrestaShopClient, Request, Result};

use crate::factory::IdOnly;

/// Image operations under `images/<resource>/<id>`.
///
/// `resource` is the plural resource name the images belong to, e.g.
/// `products` or `categories`.
#[derive(Debug, Clone)]
pub struct Images {
    client: PrestaShopClient,
    resource: String,
}

impl Images {
    pub fn new(client: PrestaShopClient, resource: impl Into<String>) -> Self {
        Self {
            client,
            resource: resource.into(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Upload a new image for entity `id`.
    ///
    /// Returns the id of the stored image when the service reports one.
    #[instrument(skip(self, upload), fields(resource = %self.resource, file = upload.file_name()))]
    pub async fn add(&self, id: Option<u64>, upload: ImageUpload) -> Result<Option<u64>> {
        let request = Request::for_add_image(&self.resource, id, upload)?;
        self.send_upload(&request).await
    }

    /// Replace the image of entity `id`.
    #[instrument(skip(self, upload), fields(resource = %self.resource, file = upload.file_name()))]
    pub async fn update(&self, id: Option<u64>, upload: ImageUpload) -> Result<Option<u64>> {
        let request = Request::for_update_image(&self.resource, id, upload)?;
        self.send_upload(&request).await
    }

    async fn send_upload(&self, request: &Request) -> Result<Option<u64>> {
        let body = self.client.execute(request).await?.text().await?;
        let image_id = match xml::extract_elements(&body, "image")?.first() {
            Some(image) => xml::from_fragment::<IdOnly>(image)?.parse()?,
            None => None,
        };
        debug!(?image_id, "Image stored");
        Ok(image_id)
    }

    /// Delete the image of entity `id`, or one specific image when
    /// `image_id` is given (products carry several).
    #[instrument(skip(self), fields(resource = %self.resource))]
    pub async fn delete(&self, id: Option<u64>, image_id: Option<u64>) -> Result<()> {
        let request = Request::for_delete_image(&self.resource, id, image_id)?;
        self.client.execute(&request).await?;
        Ok(())
    }

    /// Download the raw image of entity `id`.
    #[instrument(skip(self), fields(resource = %self.resource))]
    pub async fn get(&self, id: u64, image_id: Option<u64>) -> Result<Bytes> {
        let request = Request::for_get_image(&self.resource, id, image_id);
        self.client.execute_for_image(&request).await
    }
}
