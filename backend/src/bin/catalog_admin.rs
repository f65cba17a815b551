//! Database administration for the movie catalogue.
//!
//! ```text
//! catalog-admin migrate   apply pending migrations (idempotent)
//! catalog-admin seed      insert the sample movies when the table is empty
//! catalog-admin reset     drop and recreate the table, then seed it
//! ```
//!
//! Connection settings come from the same `CATALOG_*` variables as the
//! server; `--database-url` overrides them.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::ports::{MovieSeedRepository, SeedOutcome};
use backend::domain::sample_movies;
use backend::outbound::persistence::{
    DbPool, DieselMovieRepository, PoolConfig, reset_schema, run_pending_migrations,
};
use backend::settings::CatalogSettings;

/// `catalog-admin` command arguments.
#[derive(Debug, Parser)]
#[command(name = "catalog-admin", about = "Manage the movie catalogue database", version)]
struct CliArgs {
    /// Database connection string. Falls back to `CATALOG_DATABASE_URL` or
    /// the `CATALOG_DB_*` parts when omitted.
    #[arg(long = "database-url", value_name = "url", global = true)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Apply pending migrations.
    Migrate,
    /// Apply pending migrations, then insert the sample movies if the table is empty.
    Seed,
    /// Drop every movie, recreate the schema and insert the sample movies.
    Reset,
}

struct Target {
    database_url: String,
    tls: bool,
    pool_size: u32,
}

fn resolve_target(cli_url: Option<String>) -> Result<Target> {
    let settings = CatalogSettings::load_from_iter([OsString::from("catalog-admin")])
        .map_err(|err| eyre!("load settings: {err}"))?;
    let database_url = match cli_url {
        Some(url) => url,
        None => settings
            .database_url()?
            .ok_or_else(|| eyre!("no database configured; set CATALOG_DATABASE_URL or pass --database-url"))?,
    };
    Ok(Target {
        database_url,
        tls: settings.db_tls,
        pool_size: settings.db_pool_size(),
    })
}

async fn seed(target: &Target) -> Result<()> {
    let pool = DbPool::new(
        PoolConfig::new(target.database_url.clone())
            .with_max_size(target.pool_size)
            .with_tls(target.tls),
    )
    .await
    .wrap_err("create database pool")?;
    let repo = DieselMovieRepository::new(pool);
    let samples = sample_movies().wrap_err("build sample movies")?;
    match repo
        .seed_if_empty(&samples)
        .await
        .wrap_err("seed sample movies")?
    {
        SeedOutcome::Applied { inserted } => info!(inserted, "sample movies inserted"),
        SeedOutcome::AlreadySeeded => info!("movies table is not empty; nothing inserted"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .map_err(|err| eyre!("initialise tracing: {err}"))?;

    let args = CliArgs::parse();
    let target = resolve_target(args.database_url)?;

    match args.command {
        Command::Migrate => {
            run_pending_migrations(&target.database_url, target.tls)
                .await
                .wrap_err("apply migrations")?;
        }
        Command::Seed => {
            run_pending_migrations(&target.database_url, target.tls)
                .await
                .wrap_err("apply migrations")?;
            seed(&target).await?;
        }
        Command::Reset => {
            reset_schema(&target.database_url, target.tls)
                .await
                .wrap_err("reset schema")?;
            seed(&target).await?;
        }
    }
    Ok(())
}
