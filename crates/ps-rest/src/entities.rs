//! Bundled schemas for common resources.
//!
//! Only the writable fields PrestaShop documents are modelled; unknown
//! elements in responses (associations, read-only counters) are skipped.
//! Every field is optional so sparse `display=[...]` projections decode too.
//! Boolean flags are `u8` because the web service rejects `true`/`false`.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use prestashop_ws_client::PrestaShopClient;

use crate::entity::{Entity, Resource};
use crate::factory::Factory;

/// Numeric field that the shop may send empty (`<default_on><![CDATA[]]></default_on>`)
/// for a NULL column.
fn empty_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// One translation of a multi-language field: `<language id="1">Apple</language>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageValue {
    #[serde(rename = "@id")]
    pub id: u64,
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl LanguageValue {
    pub fn new(id: u64, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

/// A multi-language field such as `name` or `link_rewrite`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translated {
    #[serde(default)]
    pub language: Vec<LanguageValue>,
}

impl Translated {
    /// A field with a value for a single language.
    pub fn single(language_id: u64, value: impl Into<String>) -> Self {
        Self {
            language: vec![LanguageValue::new(language_id, value)],
        }
    }

    /// Add or replace the value for `language_id`.
    pub fn with(mut self, language_id: u64, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.language.iter_mut().find(|l| l.id == language_id) {
            Some(existing) => existing.value = value,
            None => self.language.push(LanguageValue::new(language_id, value)),
        }
        self
    }

    pub fn get(&self, language_id: u64) -> Option<&str> {
        self.language
            .iter()
            .find(|l| l.id == language_id)
            .map(|l| l.value.as_str())
    }
}

/// Shop category (`categories`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub id: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub id_parent: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub active: Option<u8>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub id_shop_default: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub is_root_category: Option<u8>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub position: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_add: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_upd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Translated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_rewrite: Option<Translated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Translated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<Translated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<Translated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Translated>,
}

/// Country (`countries`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub id: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub id_zone: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub id_currency: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub call_prefix: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub active: Option<u8>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub contains_states: Option<u8>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub need_identification_number: Option<u8>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub need_zip_code: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code_format: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub display_tax_label: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Translated>,
}

/// Customer group (`groups`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub id: Option<u64>,
    /// Percentage as sent by the shop, e.g. `"0.00"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduction: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub price_display_method: Option<u8>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub show_prices: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_add: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_upd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Translated>,
}

/// `<id>` wrapper used inside association lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssocId {
    pub id: u64,
}

impl From<u64> for AssocId {
    fn from(id: u64) -> Self {
        Self { id }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptionValues {
    #[serde(rename = "product_option_value", default)]
    pub values: Vec<AssocId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedImages {
    #[serde(rename = "image", default)]
    pub images: Vec<AssocId>,
}

/// `<associations>` block of a product combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociationsCombination {
    pub product_option_values: ProductOptionValues,
    pub images: AssociatedImages,
}

impl AssociationsCombination {
    pub fn new(option_values: impl IntoIterator<Item = u64>, images: impl IntoIterator<Item = u64>) -> Self {
        Self {
            product_option_values: ProductOptionValues {
                values: option_values.into_iter().map(AssocId::from).collect(),
            },
            images: AssociatedImages {
                images: images.into_iter().map(AssocId::from).collect(),
            },
        }
    }

    pub fn option_value_ids(&self) -> Vec<u64> {
        self.product_option_values.values.iter().map(|v| v.id).collect()
    }

    pub fn image_ids(&self) -> Vec<u64> {
        self.images.images.iter().map(|v| v.id).collect()
    }
}

/// Product combination (`combinations`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Combination {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub id: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub id_product: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub minimal_quantity: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub default_on: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associations: Option<AssociationsCombination>,
}

macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> Option<u64> {
                    self.id
                }

                fn set_id(&mut self, id: Option<u64>) {
                    self.id = id;
                }
            }
        )*
    };
}

impl_entity!(Category, Country, Group, Combination);

impl Factory<Category> {
    pub fn categories(client: PrestaShopClient) -> Self {
        Factory::new(client, Resource::CATEGORIES)
    }
}

impl Factory<Country> {
    pub fn countries(client: PrestaShopClient) -> Self {
        Factory::new(client, Resource::COUNTRIES)
    }
}

impl Factory<Group> {
    pub fn groups(client: PrestaShopClient) -> Self {
        Factory::new(client, Resource::GROUPS)
    }
}

impl Factory<Combination> {
    pub fn combinations(client: PrestaShopClient) -> Self {
        Factory::new(client, Resource::COMBINATIONS)
    }
}
