//! # ps-rest
//!
//! Typed CRUD access to PrestaShop web service resources.
//!
//! ## Features
//!
//! - **Factory** - One generic [`Factory<T>`] per resource: get, add, update,
//!   delete, batch add/update, id listings
//! - **Filters** - `filter[field]`, sort, limit and field projection
//! - **Images** - Upload, replace, delete and download entity images
//! - **Entities** - Ready-made schemas for categories, countries, groups and
//!   combinations
//! - **Blocking** - Synchronous mirror of every operation (`blocking` feature)
//!
//! Resources are data, not types: any resource the shop exposes can be used
//! by pairing a serde struct implementing [`Entity`] with its [`Resource`]
//! names.
//!
//! ## Example
//!
//! ```rust,ignore
//! use prestashop_ws_rest::{Category, Factory, Filter, PrestaShopClient, SortOrder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), prestashop_ws_rest::Error> {
//!     let client = PrestaShopClient::new("https://shop.example/api", "MY_WS_KEY")?;
//!     let categories = Factory::<Category>::categories(client);
//!
//!     let apples = categories
//!         .get_by_filter(
//!             &Filter::new()
//!                 .field("name", "Apple")
//!                 .sort_by("name", SortOrder::Asc)
//!                 .page(0, 5),
//!         )
//!         .await?;
//!
//!     for category in &apples {
//!         categories.delete_entity(category).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
mod entities;
mod entity;
mod factory;
mod filter;
mod images;

pub use entities::{
    AssocId, AssociatedImages, AssociationsCombination, Category, Combination, Country, Group,
    LanguageValue, ProductOptionValues, Translated,
};
pub use entity::{Entity, Resource};
pub use factory::Factory;
pub use filter::{Filter, SortOrder};
pub use images::Images;

// Re-export transport types used in factory signatures
pub use prestashop_ws_client::{
    ClientConfig, Credentials, Error, ErrorKind, ImageUpload, PrestaShopClient, Request, Result,
};
