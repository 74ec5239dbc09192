//! # prestashop-ws
//!
//! A typed client for the PrestaShop web service.
//!
//! The web service speaks XML over HTTP: every request carries the shop's
//! `ws_key`, writes are wrapped in a `<prestashop>` envelope, and list
//! queries take `filter[field]`, `sort`, `limit` and `display` parameters.
//! This library hides those details behind one generic factory per
//! resource.
//!
//! ## Security
//!
//! - The web service key is redacted in Debug output
//! - Tracing spans never record the key
//! - Request dumps and error bodies attached to errors have the key masked
//!
//! ## Crates
//!
//! - **prestashop-ws-client** - Transport: request builders, XML envelopes, error classification
//! - **prestashop-ws-rest** - Typed factories, filters, images, bundled entities, blocking mirror
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use prestashop_ws::{Category, Credentials, Factory, PrestaShopClient, Translated};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // PRESTASHOP_BASE_URL and PRESTASHOP_WS_KEY
//!     let creds = Credentials::from_env()?;
//!     let client = PrestaShopClient::from_credentials(&creds)?;
//!
//!     let categories = Factory::<Category>::categories(client);
//!     let created = categories
//!         .add(&Category {
//!             id_parent: Some(2),
//!             active: Some(1),
//!             name: Some(Translated::single(1, "Apple")),
//!             link_rewrite: Some(Translated::single(1, "apple")),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("created category {:?}", created.id);
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use prestashop_ws_client as client;
#[cfg(feature = "rest")]
pub use prestashop_ws_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use prestashop_ws_client::{
    ClientConfig, Credentials, Error, ErrorKind, ImageUpload, PrestaShopClient, Request, Result,
};
#[cfg(feature = "rest")]
pub use prestashop_ws_rest::{
    Category, Combination, Country, Entity, Factory, Filter, Group, Images, Resource, SortOrder,
    Translated,
};
#[cfg(feature = "blocking")]
pub use prestashop_ws_rest::blocking;
