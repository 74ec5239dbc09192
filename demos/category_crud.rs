//! Category CRUD against a real shop
//!
//! Creates a category, finds it through a filter, renames it, attaches an
//! image if one is given, then deletes it again.
//!
//! Run with:
//!   PRESTASHOP_BASE_URL=https://shop.example/api PRESTASHOP_WS_KEY=... \
//!     cargo run --example category_crud -- [path/to/image.png]

use prestashop_ws::{
    Category, Credentials, Factory, Filter, ImageUpload, PrestaShopClient, SortOrder, Translated,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=prestashop_ws_client=debug shows every request
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== PrestaShop Category CRUD ===\n");

    let creds = Credentials::from_env()?;
    let client = PrestaShopClient::from_credentials(&creds)?;
    let categories = Factory::<Category>::categories(client);

    // Create
    let draft = Category {
        id_parent: Some(2),
        active: Some(1),
        name: Some(Translated::single(1, "Rust Demo")),
        link_rewrite: Some(Translated::single(1, "rust-demo")),
        ..Default::default()
    };
    let mut created = categories.add(&draft).await?;
    let id = created.id.ok_or("created category has no id")?;
    println!("✓ Created category {}", id);

    // Find
    let ids = categories
        .get_ids_by_filter(
            &Filter::new()
                .field("name", "Rust Demo")
                .sort_by("id", SortOrder::Desc)
                .limit(5),
        )
        .await?;
    println!("✓ Filter found ids {:?}", ids);

    // Update
    created.name = Some(Translated::single(1, "Rust Demo (renamed)"));
    categories.update(&created).await?;
    let reread = categories.get(id).await?;
    println!(
        "✓ Renamed to {:?}",
        reread.name.as_ref().and_then(|n| n.get(1))
    );

    // Image
    if let Some(path) = std::env::args().nth(1) {
        let images = categories.images();
        let upload = ImageUpload::from_path(&path).await?;
        images.add(Some(id), upload).await?;
        let bytes = images.get(id, None).await?;
        println!("✓ Uploaded image, shop serves {} bytes", bytes.len());
    }

    // Delete
    categories.delete_entity(&created).await?;
    match categories.get(id).await {
        Err(e) if e.is_not_found() => println!("✓ Deleted category {}", id),
        other => println!("✗ Category {} still readable: {:?}", id, other.map(|c| c.id)),
    }

    Ok(())
}
