//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the zoomapi binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Zoom Phone API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "zoomapi", about = "Zoom Phone API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Stop paging after this many pages.
    #[arg(long, global = true, env = "ZOOM_MAX_PAGES")]
    pub max_pages: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The entity ID.
        id: String,
    },

    /// List entities, following continuation tokens.
    List {
        /// The type of entity to list.
        entity: Entity,

        /// Stop after this many items.
        #[arg(long)]
        limit: Option<usize>,

        /// Number of items per page.
        #[arg(long)]
        page_size: Option<u32>,

        /// Fetch only the page behind this continuation token.
        #[arg(long, conflicts_with = "limit")]
        page_token: Option<String>,
    },

    /// Show settings of a site or common area.
    Settings {
        /// The type of entity (sites or common areas).
        entity: Entity,

        /// The entity ID.
        id: String,

        /// A single site setting type (e.g. holiday_hours).
        #[arg(long)]
        setting_type: Option<String>,
    },

    /// Delete an entity.
    Delete {
        /// The type of entity to delete.
        entity: Entity,

        /// The entity ID.
        id: String,
    },

    /// Reboot a desk phone.
    Reboot {
        /// The device ID.
        device_id: String,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A phone site.
    #[value(alias = "sites")]
    Site,
    /// A desk phone or other device.
    #[value(alias = "devices")]
    Device,
    /// A common area phone.
    #[value(alias = "common-areas")]
    CommonArea,
}
