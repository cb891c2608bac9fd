use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum OrderCmd {
    #[command(
        about = "Place an order to restock inventory",
        long_about = "Record a restock order against an existing product and supplier and increment the product's stock level by the ordered quantity, atomically in one transaction."
    )]
    Place {
        #[arg(value_name = "PRODUCT", help = "Name of an existing product")]
        product_name: String,
        #[arg(value_name = "SUPPLIER", help = "Name of an existing supplier")]
        supplier_name: String,
        #[arg(value_name = "QUANTITY", help = "Units ordered")]
        quantity: i64,
        #[arg(value_name = "DATE", help = "Order date (YYYY-MM-DD)")]
        order_date: NaiveDate,
    },
    #[command(about = "List all orders")]
    List,
}
