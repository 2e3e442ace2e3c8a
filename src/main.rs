#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cargo)]
#![warn(clippy::perf)]
#![warn(clippy::complexity)]
#![warn(clippy::style)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use types::Options;
use util::{human_size, init_http_client};

pub mod request;
pub mod types;
pub mod util;
pub mod xigua;

/// Extracts direct stream URLs from a Xigua Video (ixigua.com) watch page
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Watch page URL to extract from
    url: String,

    /// Cookie header to send instead of the built-in anonymous one
    /// (falls back to the XIGUA_COOKIE environment variable)
    #[arg(short, long)]
    cookie: Option<String>,

    /// Print the extraction result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let cookie = args
        .cookie
        .or_else(|| std::env::var("XIGUA_COOKIE").ok())
        .unwrap_or_default();

    let client = init_http_client();

    info!("Extracting streams from {}", args.url);
    let data = xigua::extract(&client, &args.url, &Options { cookie })
        .await
        .context("Extracting streams")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    for media in &data {
        println!("Site:  {}", media.site);
        println!("Title: {}", media.title);
        println!("Type:  {}", media.media_type.as_str());

        let mut labels: Vec<_> = media.streams.keys().collect();
        labels.sort();
        for label in labels {
            let stream = &media.streams[label];
            println!(
                "[{label}] {} in {} part(s){}",
                human_size(stream.size),
                stream.parts.len(),
                if stream.need_mux { ", needs mux" } else { "" }
            );
            for part in &stream.parts {
                println!("    {} ({})", part.url, human_size(part.size));
            }
        }
    }

    Ok(())
}
