mod app;
mod cli;
mod commands;
mod context;
mod storage;
mod tracing;

fn main() -> anyhow::Result<()> {
    app::run()
}
