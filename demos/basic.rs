//! Basic example demonstrating the Zoom Phone API client.
//!
//! Run with:
//! ```
//! ZOOM_ACCESS_TOKEN=your-token cargo run --example basic
//! ```

use futures::{StreamExt, TryStreamExt};
use zoomapi::{Get, List, Params, SiteSettingType, ZoomClient};

#[tokio::main]
async fn main() -> zoomapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Zoom client...");
    let client = ZoomClient::from_env()?;
    println!("Connected to: {}", client.session().base_url());

    // Page through sites lazily
    println!("\n--- Listing Sites ---");
    let mut sites = client.phone_sites.list(Params::new().with("page_size", 50));
    let mut first_site = None;
    while let Some(site) = sites.try_next().await? {
        println!("  - {} ({})", site["name"], site["id"]);
        if first_site.is_none() {
            first_site = site["id"].as_str().map(str::to_string);
        }
    }

    if let Some(site_id) = first_site {
        println!("\n--- Site Details ---");
        let site = client.phone_sites.get(&site_id).await?;
        println!("Site: {}", site["name"]);
        println!("  Code: {}", site["site_code"]);

        let hours = client
            .phone_sites
            .get_settings(&site_id, Some(SiteSettingType::HolidayHours))
            .await?;
        println!("  Holiday hours: {}", hours["holiday_hours"]);
    }

    // Only the first ten devices; later pages are never requested
    println!("\n--- First Devices ---");
    let devices: Vec<_> = client
        .phone_devices
        .list(Params::new())
        .take(10)
        .try_collect::<Vec<_>>()
        .await?;
    for device in &devices {
        println!("  - {} [{}]", device["display_name"], device["mac_address"]);
    }

    println!("\nDone!");
    Ok(())
}
