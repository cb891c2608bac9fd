use clap::Parser;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Track products, suppliers, and restock orders in a local SQLite inventory",
    long_about = "A command-line inventory tracker. Products, suppliers, and orders live in a single SQLite file; placing an order increments the referenced product's stock.",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(
        long,
        env = "STOCKROOM_DATA_DIR",
        default_value = ".stockroom/",
        value_name = "DIR",
        help = "Directory to store persistent data"
    )]
    pub data_dir: String,

    #[arg(
        long = "log-file",
        env = "STOCKROOM_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long,
        default_value_t = false,
        help = "Delete the SQLite database before running the command"
    )]
    pub reset: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

pub fn parse() -> Cli {
    dotenvy::dotenv().ok();
    Cli::parse()
}
