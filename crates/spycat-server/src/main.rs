//! Spycat agency server
//!
//! HTTP service for hiring spy cats and running their missions.

mod args;
mod error;
mod routes;
mod server;

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use spycat_core::{AgencyBuilder, BreedValidator, CatApiBreeds, FixedBreeds};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let breeds: Arc<dyn BreedValidator> = if args.breeds.is_empty() {
        info!("Validating breeds against {}", args.breeds_url);
        Arc::new(
            CatApiBreeds::new(&args.breeds_url, Duration::from_secs(args.breeds_timeout))
                .context("Failed to set up breed lookup")?,
        )
    } else {
        info!("Validating breeds against a fixed list of {}", args.breeds.len());
        Arc::new(FixedBreeds::new(args.breeds.iter().cloned()))
    };

    let agency = AgencyBuilder::new()
        .with_database_path(args.database_file.as_ref())
        .with_breed_validator(breeds)
        .build()
        .await
        .context("Failed to initialize agency")?;

    let cors = server::cors_layer(&args.allowed_origins, args.allow_credentials)?;
    let app = routes::router(agency).layer(cors);

    let listener = TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;

    server::serve(listener, app).await
}
