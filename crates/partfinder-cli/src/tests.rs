use partfinder_core::{SourceTag, VENDORS};
use partfinder_search::{annotate_best_price, FallbackReason, Notice, SearchOutcome};

use super::*;

#[test]
fn parses_search_command_with_multiple_words() {
    let cli = Cli::try_parse_from(["partfinder", "search", "neo", "550"])
        .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Search {
            query,
            timeout_ms,
            json,
        }) => {
            assert_eq!(query.join(" "), "neo 550");
            assert!(timeout_ms.is_none());
            assert!(!json);
        }
        other => panic!("expected search command, got {other:?}"),
    }
}

#[test]
fn parses_search_flags() {
    let cli = Cli::try_parse_from([
        "partfinder",
        "search",
        "kraken",
        "--timeout-ms",
        "250",
        "--json",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            timeout_ms: Some(250),
            json: true,
            ..
        })
    ));
}

#[test]
fn search_requires_a_query() {
    assert!(Cli::try_parse_from(["partfinder", "search"]).is_err());
}

#[test]
fn parses_catalog_command() {
    let cli = Cli::try_parse_from(["partfinder", "catalog"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Catalog)));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["partfinder"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn renders_search_links_with_notice_and_best_price() {
    let entries = VENDORS
        .iter()
        .map(|v| v.search_link_entry("widget"))
        .collect();
    let outcome = SearchOutcome {
        query: "widget".to_string(),
        results: annotate_best_price(entries),
        source: SourceTag::FallbackSearchLinks,
        notice: Some(Notice::for_local_fallback(
            "widget",
            false,
            FallbackReason::Unreachable,
        )),
        fallback_reason: Some(FallbackReason::Unreachable),
    };

    let text = render::render_outcome(&outcome);
    assert!(text.starts_with("Vendor Search Links [Manual] - 5 result(s)"));
    assert!(text.contains("Vendor search:"));
    assert!(text.contains("offline mode"));
    assert!(text.contains("[best price] widget | REV Robotics | $45.99"));
    assert!(text.contains("widget | Deküp Robotics | See site"));
    assert_eq!(text.matches("(search link)").count(), 5);
}

#[test]
fn renders_catalog_entries_without_search_link_marker() {
    let catalog = Catalog::builtin().unwrap();
    let entries = catalog.get("victor spx").unwrap().to_vec();
    let outcome = SearchOutcome {
        query: "victor spx".to_string(),
        results: annotate_best_price(entries),
        source: SourceTag::Database,
        notice: None,
        fallback_reason: None,
    };

    let text = render::render_outcome(&outcome);
    assert!(text.starts_with("FRC Parts Database [Verified] - 1 result(s)"));
    assert!(text.contains("$49.99 | Out of Stock"));
    assert!(!text.contains("(search link)"));
}
