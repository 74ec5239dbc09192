//! The entity contract and resource naming.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record of a web service resource.
///
/// The serde implementations describe the XML content of the entity's
/// element; the element name itself comes from the [`Resource`] the
/// factory is configured with, so the same type can be serialized as
/// `<category>` without any type-name magic.
///
/// Option fields should carry `#[serde(skip_serializing_if = "Option::is_none")]`
/// so an unset `id` is left out of create payloads.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Server-assigned identifier, unset before creation.
    fn id(&self) -> Option<u64>;

    /// Replace the identifier.
    fn set_id(&mut self, id: Option<u64>);
}

/// Singular and plural names of a web service resource.
///
/// The plural name is the URL path segment and the list wrapper element
/// (`categories`), the singular name is the entity element (`category`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    singular: Cow<'static, str>,
    plural: Cow<'static, str>,
}

impl Resource {
    pub const CATEGORIES: Resource = Resource::from_static("category", "categories");
    pub const COUNTRIES: Resource = Resource::from_static("country", "countries");
    pub const GROUPS: Resource = Resource::from_static("group", "groups");
    pub const PRODUCTS: Resource = Resource::from_static("product", "products");
    pub const COMBINATIONS: Resource = Resource::from_static("combination", "combinations");
    pub const ORDER_HISTORIES: Resource = Resource::from_static("order_history", "order_histories");

    /// Resource names known at runtime.
    pub fn new(singular: impl Into<Cow<'static, str>>, plural: impl Into<Cow<'static, str>>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Resource names known at compile time.
    pub const fn from_static(singular: &'static str, plural: &'static str) -> Self {
        Self {
            singular: Cow::Borrowed(singular),
            plural: Cow::Borrowed(plural),
        }
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.plural)
    }
}
