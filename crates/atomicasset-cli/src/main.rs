//! # AtomicAssets CLI
//!
//! Query an AtomicAssets indexer from the command line.

use anyhow::{bail, Context, Result};
use atomicasset_client::{Client, ClientConfig, FilterSpec, Method};
use atomicasset_core::encoding::encode_path_segment;
use serde_json::{Map, Value};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    let rest = &args[2..];
    match args[1].as_str() {
        "health" => {
            fetch("/health", &Value::Object(Map::new())).await?;
        }
        "config" => {
            let namespace = match rest.first().map(String::as_str) {
                None | Some("assets") => "atomicassets",
                Some("market") => "atomicmarket",
                Some("tools") => "atomictools",
                Some(other) => {
                    eprintln!("Unknown config namespace: {other}");
                    eprintln!("Usage: atomicasset config [assets|market|tools]");
                    std::process::exit(1);
                }
            };
            fetch(&format!("/{namespace}/v1/config"), &Value::Object(Map::new())).await?;
        }
        "asset" => {
            let Some(id) = rest.first() else {
                eprintln!("Usage: atomicasset asset <asset_id>");
                std::process::exit(1);
            };
            let path = format!("/atomicassets/v1/assets/{}", encode_path_segment(id));
            fetch(&path, &Value::Object(Map::new())).await?;
        }
        "assets" => {
            let filter = parse_filter(rest)?;
            fetch("/atomicassets/v1/assets", &filter).await?;
        }
        "collection" => {
            let Some(name) = rest.first() else {
                eprintln!("Usage: atomicasset collection <collection_name>");
                std::process::exit(1);
            };
            let path = format!("/atomicassets/v1/collections/{}", encode_path_segment(name));
            fetch(&path, &Value::Object(Map::new())).await?;
        }
        "query" => {
            let filter = parse_filter(rest)?;
            let query = filter
                .to_query()
                .context("Failed to encode filter")?
                .to_query_string();
            println!("{query}");
        }
        "help" | "--help" | "-h" => {
            print_help();
        }
        cmd => {
            eprintln!("Unknown command: {cmd}");
            print_help();
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Call `path` and print the decoded payload as pretty JSON.
async fn fetch(path: &str, filter: &Value) -> Result<()> {
    let config = ClientConfig::from_env().context("Invalid client configuration")?;
    let client = Client::new(config).context("Failed to create client")?;

    tracing::debug!(base_url = client.base_url(), path, "Fetching");

    let resp = client
        .call::<Value, Value>(Method::GET, path, Some(filter))
        .await
        .with_context(|| format!("GET {path} failed"))?;

    if resp.is_error() {
        tracing::warn!(status = resp.http_status, path, "Request returned an error status");
    }

    println!("{}", serde_json::to_string_pretty(&resp.data)?);
    Ok(())
}

/// Build a dynamic filter from `key=value` arguments. Values containing `,`
/// become lists.
fn parse_filter(args: &[String]) -> Result<Value> {
    let mut members = Map::new();

    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("expected key=value, got '{arg}'");
        };
        if key.is_empty() {
            bail!("missing key in '{arg}'");
        }

        let value = if value.contains(',') {
            Value::Array(
                value
                    .split(',')
                    .map(|item| Value::String(item.to_string()))
                    .collect(),
            )
        } else {
            Value::String(value.to_string())
        };
        members.insert(key.to_string(), value);
    }

    Ok(Value::Object(members))
}

fn print_help() {
    println!(
        r"AtomicAssets CLI

USAGE:
    atomicasset <COMMAND> [ARGS]

COMMANDS:
    health                       Show indexer health
    config [assets|market|tools] Show contract configuration
    asset <asset_id>             Show one asset
    assets [key=value ...]       List assets matching a filter
    collection <name>            Show one collection
    query [key=value ...]        Print the query string a filter encodes to
    help                         Show this help message

ENVIRONMENT:
    ATOMICASSET_API_URL          Indexer base URL (default http://localhost:9000)
    ATOMICASSET_HOST             Host header override
    ATOMICASSET_TIMEOUT_SECS     Request timeout in seconds (default 30)
    RUST_LOG                     Log filter (default info)

EXAMPLES:
    atomicasset assets owner=someaccount limit=10
    atomicasset assets ids=1099835349411,1099835349412
    atomicasset query collection_whitelist=alien.worlds,farmersworld order=desc
"
    );
}
