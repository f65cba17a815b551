//! Backend entry-point: loads settings, picks the movie store and serves the
//! REST API.

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::ports::SeedOutcome;
use backend::domain::sample_movies;
use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::server::{MovieStore, ServerConfig, create_server};
use backend::settings::CatalogSettings;

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn build_store(settings: &CatalogSettings) -> io::Result<MovieStore> {
    let database_url = settings.database_url().map_err(io::Error::other)?;
    let Some(database_url) = database_url else {
        warn!("no database configured; movies are kept in memory and lost on restart");
        return Ok(MovieStore::in_memory());
    };

    match run_pending_migrations(&database_url, settings.db_tls).await {
        Ok(applied) => info!(applied = applied.len(), "database schema is current"),
        // The pool is lazy, so the server still starts; requests report store
        // errors until the database is reachable and migrated.
        Err(error) => warn!(%error, "could not apply migrations at startup"),
    }

    let config = PoolConfig::new(database_url)
        .with_max_size(settings.db_pool_size())
        .with_tls(settings.db_tls);
    let pool = DbPool::new(config)
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
    Ok(MovieStore::Postgres(pool))
}

async fn seed_samples(store: &MovieStore) -> io::Result<()> {
    let samples = sample_movies().map_err(io::Error::other)?;
    match store.seeder().seed_if_empty(&samples).await {
        Ok(SeedOutcome::Applied { inserted }) => info!(inserted, "sample movies seeded"),
        Ok(SeedOutcome::AlreadySeeded) => info!("store already holds movies; sample data skipped"),
        Err(error) => warn!(%error, "sample movie seeding failed"),
    }
    Ok(())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let settings = CatalogSettings::load().map_err(io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let store = build_store(&settings).await?;
    if settings.sample_data {
        seed_samples(&store).await?;
    }

    info!(%bind_addr, store = store.kind(), "starting movie catalogue backend");
    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, store).with_cors_origins(settings.cors_origins);
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
