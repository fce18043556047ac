use crate::config::Config;
use crate::photos::UnsplashPhotos;
use crate::places::{MapboxLookup, SerpPlaceSearch};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::service::CoffeeService;
use crate::store::AirtableStore;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

mod config;
mod domain;
mod errors;
mod geo;
mod photos;
mod places;
mod responses;
mod router;
mod service;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    // One shared client for all upstream calls. The upstreams are opaque
    // third parties, so a hard timeout is imposed here.
    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ HTTP client init failed: {e}");
            std::process::exit(1);
        }
    };

    let service = CoffeeService::new(
        Arc::new(UnsplashPhotos::new(
            client.clone(),
            config.unsplash_access_key.clone(),
        )),
        Arc::new(SerpPlaceSearch::new(
            client.clone(),
            config.serp_api_key.clone(),
        )),
        Arc::new(MapboxLookup::new(
            client.clone(),
            config.mapbox_token.clone(),
        )),
        Arc::new(AirtableStore::new(
            client,
            config.airtable_token.clone(),
            config.airtable_base_id.clone(),
            config.airtable_table.clone(),
        )),
    );

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid BIND_ADDR {}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &service) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
