use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum ProductCmd {
    #[command(
        about = "Add a new product",
        long_about = "Insert a product linked to an existing supplier by name. Fails cleanly when the supplier does not exist."
    )]
    Add {
        #[arg(value_name = "NAME", help = "Product name")]
        name: String,
        #[arg(value_name = "STOCK", help = "Initial stock level")]
        stock_level: i64,
        #[arg(value_name = "PRICE", help = "Unit price")]
        price: f64,
        #[arg(value_name = "SUPPLIER", help = "Name of an existing supplier")]
        supplier_name: String,
    },
    #[command(about = "List all products")]
    List,
    #[command(
        about = "Update the stock level of a product",
        long_about = "Overwrite a product's stock level. The product is looked up by name; lowest id wins on duplicates."
    )]
    UpdateStock {
        #[arg(value_name = "NAME", help = "Product name")]
        product_name: String,
        #[arg(value_name = "STOCK", help = "New stock level")]
        new_stock: i64,
    },
    #[command(about = "Remove a product from the inventory")]
    Remove {
        #[arg(value_name = "NAME", help = "Product name")]
        product_name: String,
    },
    #[command(
        about = "List products below a stock threshold",
        long_about = "List every product whose stock level is strictly below the given threshold (numeric comparison)."
    )]
    LowStock {
        #[arg(value_name = "THRESHOLD", help = "Stock threshold")]
        threshold: i64,
    },
}
