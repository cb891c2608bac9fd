use std::path::PathBuf;

const DB_FILE_NAME: &str = "stockroom.sqlite";

pub struct Context {
    pub data_dir: PathBuf,
    pub log_file: Option<PathBuf>,
    pub reset: bool,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            data_dir: PathBuf::from(&cli.data_dir),
            log_file: cli.log_file.as_ref().map(PathBuf::from),
            reset: cli.reset,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}
