//! Request builders for each web service operation.
//!
//! Every builder returns a [`Request`] descriptor; nothing here touches the
//! network. Operations that address a single record refuse to build without
//! an id so the failure happens before any call is made.

use crate::error::{Error, Result};
use crate::request::{ImageUpload, Request, RequestMethod};
use crate::xml;

/// Query values for the `display` parameter.
pub const DISPLAY_FULL: &str = "full";

impl Request {
    /// `GET resource/id`, expecting a response rooted at `root_element`.
    ///
    /// Without an id the request targets the resource listing itself.
    pub fn for_get(resource: &str, id: Option<u64>, root_element: &str) -> Self {
        let path = match id {
            Some(id) => format!("{}/{}", resource, id),
            None => resource.to_string(),
        };
        Request::new(RequestMethod::Get, path).root_element(root_element)
    }

    /// `POST resource` with every fragment in one `<prestashop>` envelope.
    pub fn for_add<S: AsRef<str>>(resource: &str, fragments: &[S]) -> Self {
        Request::new(RequestMethod::Post, resource).xml(xml::envelope(fragments))
    }

    /// `PUT resource/id` with the fragment wrapped in the envelope.
    pub fn for_update(resource: &str, id: Option<u64>, fragment: &str) -> Result<Self> {
        let id = id.ok_or_else(|| Error::missing_identifier("update"))?;
        Ok(Request::new(RequestMethod::Put, format!("{}/{}", resource, id))
            .xml(xml::envelope(&[fragment]))
            .root_element(xml::ENVELOPE))
    }

    /// `PUT resource` with several fragments in one envelope (batch update).
    pub fn for_update_list<S: AsRef<str>>(resource: &str, fragments: &[S]) -> Self {
        Request::new(RequestMethod::Put, resource).xml(xml::envelope(fragments))
    }

    /// `DELETE resource/id`.
    pub fn for_delete(resource: &str, id: Option<u64>) -> Result<Self> {
        let id = id.ok_or_else(|| Error::missing_identifier("delete"))?;
        Ok(
            Request::new(RequestMethod::Delete, format!("{}/{}", resource, id))
                .root_element(xml::ENVELOPE),
        )
    }

    /// `GET resource` with filter, sort and limit query parameters.
    ///
    /// Parameters are appended in a fixed order: `display`, one
    /// `filter[key]` per entry, `sort`, `limit`, and always `date=1` so the
    /// service accepts date-range filters.
    pub fn for_filter(
        resource: &str,
        display: Option<&str>,
        filter: &[(String, String)],
        sort: Option<&str>,
        limit: Option<&str>,
        root_element: &str,
    ) -> Self {
        let mut request = Request::new(RequestMethod::Get, resource).root_element(root_element);
        if let Some(display) = display {
            request = request.query("display", display);
        }
        for (key, value) in filter {
            request = request.query(format!("filter[{}]", key), value.as_str());
        }
        if let Some(sort) = sort.filter(|s| !s.is_empty()) {
            request = request.query("sort", sort);
        }
        if let Some(limit) = limit.filter(|l| !l.is_empty()) {
            request = request.query("limit", limit);
        }
        request.query("date", "1")
    }

    /// `POST images/resource/id` uploading a new image.
    pub fn for_add_image(resource: &str, id: Option<u64>, upload: ImageUpload) -> Result<Self> {
        let id = id.ok_or_else(|| Error::missing_identifier("add image"))?;
        Ok(Request::new(RequestMethod::Post, image_path(resource, id, None)).image(upload))
    }

    /// `PUT images/resource/id` replacing an image.
    pub fn for_update_image(resource: &str, id: Option<u64>, upload: ImageUpload) -> Result<Self> {
        let id = id.ok_or_else(|| Error::missing_identifier("update image"))?;
        Ok(Request::new(RequestMethod::Put, image_path(resource, id, None)).image(upload))
    }

    /// `DELETE images/resource/id[/image_id]`.
    pub fn for_delete_image(
        resource: &str,
        id: Option<u64>,
        image_id: Option<u64>,
    ) -> Result<Self> {
        let id = id.ok_or_else(|| Error::missing_identifier("delete image"))?;
        Ok(
            Request::new(RequestMethod::Delete, image_path(resource, id, image_id))
                .root_element(xml::ENVELOPE),
        )
    }

    /// `GET images/resource/id[/image_id]` returning raw image bytes.
    pub fn for_get_image(resource: &str, id: u64, image_id: Option<u64>) -> Self {
        Request::new(RequestMethod::Get, image_path(resource, id, image_id))
    }

    /// `POST resource` with `sendemail=1`, so the shop notifies the customer
    /// about the new order state.
    pub fn for_add_order_history<S: AsRef<str>>(resource: &str, fragments: &[S]) -> Self {
        Request::for_add(resource, fragments).query("sendemail", "1")
    }
}

fn image_path(resource: &str, id: u64, image_id: Option<u64>) -> String {
    match image_id {
        Some(image_id) => format!("images/{}/{}/{}", resource, id, image_id),
        None => format!("images/{}/{}", resource, id),
    }
}

/// Value of the `display` parameter for a field projection.
///
/// An empty projection means every field (`full`); otherwise the fields are
/// comma-joined in brackets, e.g. `[id,reference]`.
pub fn display_value<S: AsRef<str>>(fields: &[S]) -> String {
    if fields.is_empty() {
        return DISPLAY_FULL.to_string();
    }
    let joined: Vec<&str> = fields.iter().map(|f| f.as_ref()).collect();
    format!("[{}]", joined.join(","))
}
