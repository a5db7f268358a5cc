//! `rosterctl`: the client list on the command line.

mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use roster_config::{ConfigLoader, RosterConfig, StorageBackend};
use roster_core::{
    ClientListController, FileStore, KeyValueStore, MemoryStore, RecordStore,
    SortPriorityEngine, SortStatePersistence, persistence::SlotKeys,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("failed to load roster config")?;
    let config = load.config;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
    debug!(source = ?load.source, "configuration loaded");

    let store = open_store(&args, &config)?;
    let keys = SlotKeys {
        active_sorts: config.storage.active_sorts_key.clone(),
        field_order: config.storage.field_order_key.clone(),
    };
    let default_order = config
        .sorting
        .field_order()
        .context("invalid sorting.default_field_order")?;
    let engine = SortPriorityEngine::load(
        SortStatePersistence::with_keys(store, keys),
        &default_order,
    );
    let mut list = ClientListController::new(RecordStore::demo(), engine);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(args.command, &mut list, &mut out)?;
    out.flush()?;
    Ok(())
}

fn open_store(
    args: &Cli,
    config: &RosterConfig,
) -> Result<Box<dyn KeyValueStore>> {
    if args.memory || config.storage.backend == StorageBackend::Memory {
        debug!("using in-memory sort state");
        return Ok(Box::new(MemoryStore::new()));
    }

    let dir = args
        .storage_dir
        .clone()
        .or_else(|| config.storage.resolved_dir())
        .ok_or_else(|| {
            anyhow!("no storage directory; pass --storage-dir or set storage.dir")
        })?;
    debug!(dir = %dir.display(), "using file sort state");
    Ok(Box::new(FileStore::new(dir)))
}
