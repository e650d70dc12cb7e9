//! Zoom Phone API CLI binary.
//!
//! A command-line interface for interacting with the Zoom Phone API.

use std::process::ExitCode;

use clap::Parser;
use futures::{StreamExt, TryStreamExt};
use tabled::Table;
use tracing_subscriber::EnvFilter;
use zoomapi::cli::{Cli, Command, Entity};
use zoomapi::output::{PrettyPrint, ResourceRow};
use zoomapi::{
    Delete, Get, JsonObject, List, Params, PhoneCommonAreas, PhoneDevices, PhoneSites, Resource,
    SessionOptions, SiteSettingType, ZoomClient, ZoomError,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match build_client(cli.max_pages) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set ZOOM_ACCESS_TOKEN environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(max_pages: Option<u32>) -> zoomapi::Result<ZoomClient> {
    ZoomClient::from_env_with(SessionOptions {
        max_pages,
        ..Default::default()
    })
}

async fn run(client: &ZoomClient, cli: Cli) -> zoomapi::Result<()> {
    match cli.command {
        Command::Get { entity, id } => {
            let item = match entity {
                Entity::Site => client.phone_sites.get(&id).await?,
                Entity::Device => client.phone_devices.get(&id).await?,
                Entity::CommonArea => client.phone_common_areas.get(&id).await?,
            };
            output_single(&item, cli.json)
        }
        Command::List {
            entity,
            limit,
            page_size,
            page_token,
        } => handle_list(client, entity, limit, page_size, page_token, cli.json).await,
        Command::Settings {
            entity,
            id,
            setting_type,
        } => {
            let settings = match entity {
                Entity::Site => {
                    let setting_type = setting_type
                        .as_deref()
                        .map(str::parse::<SiteSettingType>)
                        .transpose()?;
                    client.phone_sites.get_settings(&id, setting_type).await?
                }
                Entity::CommonArea => client.phone_common_areas.get_settings(&id).await?,
                Entity::Device => {
                    eprintln!("Error: Devices have no settings endpoint");
                    eprintln!("Hint: Use 'zoomapi get device <id>'");
                    return Err(ZoomError::InvalidSettingType(
                        "devices have no settings".to_string(),
                    ));
                }
            };
            output_single(&settings, cli.json)
        }
        Command::Delete { entity, id } => {
            match entity {
                Entity::Site => client.phone_sites.delete(&id).await?,
                Entity::Device => client.phone_devices.delete(&id).await?,
                Entity::CommonArea => client.phone_common_areas.delete(&id).await?,
            }
            println!("Deleted {id}");
            Ok(())
        }
        Command::Reboot { device_id } => {
            client.phone_devices.reboot_desk_phone(&device_id).await?;
            println!("Reboot requested for {device_id}");
            Ok(())
        }
    }
}

async fn handle_list(
    client: &ZoomClient,
    entity: Entity,
    limit: Option<usize>,
    page_size: Option<u32>,
    page_token: Option<String>,
    json: bool,
) -> zoomapi::Result<()> {
    let mut params = Params::new();
    if let Some(size) = page_size {
        params.set("page_size", size);
    }

    let (items, next_token) = if let Some(token) = page_token {
        params.set(zoomapi::NEXT_PAGE_TOKEN, token);
        let (endpoint, items_key) = match entity {
            Entity::Site => (client.phone_sites.endpoint(), PhoneSites::ITEMS_KEY),
            Entity::Device => (client.phone_devices.endpoint(), PhoneDevices::ITEMS_KEY),
            Entity::CommonArea => (
                client.phone_common_areas.endpoint(),
                PhoneCommonAreas::ITEMS_KEY,
            ),
        };
        let page = endpoint
            .get_page::<JsonObject>(endpoint.url_for(&[])?, items_key, &params)
            .await?;
        (page.items, page.next_page_token)
    } else {
        let stream = match entity {
            Entity::Site => client.phone_sites.list(params),
            Entity::Device => client.phone_devices.list(params),
            Entity::CommonArea => client.phone_common_areas.list(params),
        };
        // Dropping the stream after `limit` items stops further page requests.
        let items = stream
            .take(limit.unwrap_or(usize::MAX))
            .try_collect::<Vec<_>>()
            .await?;
        (items, None)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        let rows: Vec<ResourceRow> = items.iter().map(ResourceRow::from).collect();
        println!("{}", Table::new(rows));
        match next_token {
            Some(token) => println!("\n{} items (next page: --page-token {token})", items.len()),
            None => println!("\n{} items", items.len()),
        }
    }
    Ok(())
}

fn output_single(item: &JsonObject, json: bool) -> zoomapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}
