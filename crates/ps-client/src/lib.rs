//! # ps-client
//!
//! Core HTTP transport for the PrestaShop web service.
//!
//! This crate provides:
//! - Request descriptors and one builder per web service operation
//! - `ws_key` authentication on every request
//! - `<prestashop>` XML envelopes and element extraction
//! - Classification of non-success responses into a single error kind
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (ps-rest: Factory<T>, Images, blocking mirror)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Request builders                          │
//! │  - for_get / for_add / for_update / for_delete / for_filter │
//! │  - image and order-history variants                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PrestaShopClient                          │
//! │  - Base URL + ws_key, reqwest underneath                    │
//! │  - execute / execute_entity / execute_list / ids / image    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use prestashop_ws_client::{PrestaShopClient, Request};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), prestashop_ws_client::Error> {
//!     let client = PrestaShopClient::new("https://shop.example/api", "MY_WS_KEY")?;
//!
//!     let ids = client
//!         .execute_for_ids(&Request::for_get("categories", None, "prestashop"), "category")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod builder;
mod client;
mod config;
mod error;
mod request;
mod response;
pub mod xml;

pub use builder::{display_value, DISPLAY_FULL};
pub use client::PrestaShopClient;
pub use config::{ClientConfig, ClientConfigBuilder, Credentials};
pub use error::{Error, ErrorKind, Result};
pub use request::{ImageUpload, Request, RequestBody, RequestMethod};
pub use response::Response;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("prestashop-ws/", env!("CARGO_PKG_VERSION"));
