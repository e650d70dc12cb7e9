//! CLI argument parsing tests.

use clap::Parser;
use zoomapi::cli::{Cli, Command, Entity};

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["zoomapi", "get", "site", "site_main"]);

    assert!(!cli.json);
    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::Site);
            assert_eq!(id, "site_main");
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_list_with_plural_alias() {
    let cli = Cli::parse_from(["zoomapi", "list", "devices", "--limit", "5", "--page-size", "50"]);

    match cli.command {
        Command::List {
            entity,
            limit,
            page_size,
            page_token,
        } => {
            assert_eq!(entity, Entity::Device);
            assert_eq!(limit, Some(5));
            assert_eq!(page_size, Some(50));
            assert!(page_token.is_none());
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_cli_parses_common_area_alias() {
    let cli = Cli::parse_from(["zoomapi", "get", "common-areas", "ca1"]);
    match cli.command {
        Command::Get { entity, .. } => assert_eq!(entity, Entity::CommonArea),
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_settings_with_type() {
    let cli = Cli::parse_from([
        "zoomapi",
        "settings",
        "site",
        "site1",
        "--setting-type",
        "holiday_hours",
        "--json",
    ]);

    assert!(cli.json);
    match cli.command {
        Command::Settings {
            entity,
            id,
            setting_type,
        } => {
            assert_eq!(entity, Entity::Site);
            assert_eq!(id, "site1");
            assert_eq!(setting_type.as_deref(), Some("holiday_hours"));
        }
        _ => panic!("Expected Settings command"),
    }
}

#[test]
fn test_cli_parses_reboot_and_max_pages() {
    let cli = Cli::parse_from(["zoomapi", "--max-pages", "10", "reboot", "dev1"]);

    assert_eq!(cli.max_pages, Some(10));
    match cli.command {
        Command::Reboot { device_id } => assert_eq!(device_id, "dev1"),
        _ => panic!("Expected Reboot command"),
    }
}

#[test]
fn test_cli_rejects_unknown_entity() {
    let result = Cli::try_parse_from(["zoomapi", "get", "meeting", "123"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_limit_with_page_token() {
    let result = Cli::try_parse_from([
        "zoomapi",
        "list",
        "sites",
        "--limit",
        "5",
        "--page-token",
        "abc",
    ]);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

    let cli = Cli::parse_from(["zoomapi", "list", "sites", "--page-token", "abc"]);
    match cli.command {
        Command::List { page_token, limit, .. } => {
            assert_eq!(page_token.as_deref(), Some("abc"));
            assert!(limit.is_none());
        }
        _ => panic!("Expected List command"),
    }
}
