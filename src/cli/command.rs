use clap::Subcommand;

use crate::cli::order_cmd::OrderCmd;
use crate::cli::product_cmd::ProductCmd;
use crate::cli::supplier_cmd::SupplierCmd;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Commands related to products",
        long_about = "Add, list, update, and remove products in the inventory, and report products running low on stock."
    )]
    Product {
        #[command(subcommand)]
        cmd: ProductCmd,
    },
    #[command(
        about = "Commands related to suppliers",
        long_about = "Add, list, update, and remove the suppliers that products and orders reference."
    )]
    Supplier {
        #[command(subcommand)]
        cmd: SupplierCmd,
    },
    #[command(
        about = "Commands related to orders",
        long_about = "Place restock orders (which increment the product's stock level) and list order history."
    )]
    Order {
        #[command(subcommand)]
        cmd: OrderCmd,
    },
}
