mod args;
mod command;
mod order_cmd;
mod product_cmd;
mod supplier_cmd;

pub use args::Cli;
pub use command::Command;
pub use order_cmd::OrderCmd;
pub use product_cmd::ProductCmd;
pub use supplier_cmd::SupplierCmd;

pub use args::parse;
