use crate::cli::Command;
use crate::storage::Storage;

pub mod order;
pub mod product;
pub mod supplier;

pub trait CommandRunner {
    fn run<S: Storage>(&self, store: &S) -> anyhow::Result<()>;
}

impl Command {
    pub fn run<S: Storage>(&self, store: &S) -> anyhow::Result<()> {
        match self {
            Command::Product { cmd } => cmd.run(store),
            Command::Supplier { cmd } => cmd.run(store),
            Command::Order { cmd } => cmd.run(store),
        }
    }
}
