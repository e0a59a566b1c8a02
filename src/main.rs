/// Pair tag generator
///
/// Retrieves every SushiSwap liquidity pair on Arbitrum One from the
/// exchange subgraph and emits one labeled-contract tag per pair as JSON.
///
/// Usage: cargo run -- --api-key <KEY> [--chain-id 42161] [--output tags.json]
use clap::{Arg, ArgAction, Command};
use log::{error, info};
use pairtags::retrieve_tags;
use pairtags::tags::retriever::SUPPORTED_CHAIN_ID;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    let matches = Command::new("pairtags")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate labeled-contract tags for SushiSwap pairs on Arbitrum One")
        .arg(
            Arg::new("chain-id")
                .short('c')
                .long("chain-id")
                .value_name("CHAIN_ID")
                .default_value(SUPPORTED_CHAIN_ID)
                .help("EVM chain id (only 42161 is supported)")
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("API_KEY")
                .help("The Graph gateway API key (falls back to GRAPH_API_KEY)")
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the tag list to FILE instead of stdout")
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Pretty-print the JSON output")
        )
        .get_matches();

    let chain_id = matches
        .get_one::<String>("chain-id")
        .cloned()
        .unwrap_or_else(|| SUPPORTED_CHAIN_ID.to_string());

    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| std::env::var("GRAPH_API_KEY").ok())
        .unwrap_or_default();

    let tags = match retrieve_tags(&chain_id, &api_key).await {
        Ok(tags) => tags,
        Err(e) => {
            error!("Tag retrieval failed: {}", e);
            process::exit(1);
        }
    };

    let json = if matches.get_flag("pretty") {
        serde_json::to_string_pretty(&tags)
    } else {
        serde_json::to_string(&tags)
    };

    let json = match json {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize tags: {}", e);
            process::exit(1);
        }
    };

    match matches.get_one::<String>("output") {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &json) {
                error!("Failed to write {}: {}", path, e);
                process::exit(1);
            }
            info!("Wrote {} tags to {}", tags.len(), path);
        }
        None => println!("{}", json),
    }
}
