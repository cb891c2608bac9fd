use crate::{context, storage};
use anyhow::{Context, Result};

pub fn init_data_dir(ctx: &context::Context) -> Result<()> {
    std::fs::create_dir_all(&ctx.data_dir).context("initializing data dir")?;
    Ok(())
}

pub fn init_store(ctx: &context::Context) -> Result<storage::SqliteStore> {
    let store = storage::SqliteStore::new(ctx.db_path());
    if ctx.reset {
        store.reset_all().context("resetting storage")?;
    }
    store.init().context("initializing storage")?;
    Ok(store)
}
