mod wiring;

use crate::{cli, context, storage};
use anyhow::Result;

pub struct App {
    pub ctx: context::Context,
    pub store: storage::SqliteStore,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(ctx.log_file.as_deref());
        log::info!("🚀 Starting stockroom");
        log::info!("📂 Data dir: {}", ctx.data_dir.to_string_lossy());
        log::info!("🗃️ Database: {}", ctx.db_path().to_string_lossy());
        if let Some(path) = ctx.log_file.as_deref() {
            log::info!("📝 Log file: {}", path.to_string_lossy());
        }

        wiring::init_data_dir(&ctx)?;
        let store = wiring::init_store(&ctx)?;

        Ok((Self { ctx, store }, cli))
    }
}

pub fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;
    cli.cmd.run(&app.store)
}
