use super::CommandRunner;
use crate::cli;
use crate::storage::{Storage, StorageRead, StorageTx, StorageWrite};
use anyhow::Result;

impl CommandRunner for cli::OrderCmd {
    fn run<S: Storage>(&self, store: &S) -> Result<()> {
        match self {
            cli::OrderCmd::Place {
                product_name,
                supplier_name,
                quantity,
                order_date,
            } => {
                let tx = store.begin_tx()?;
                let Some(product) = tx.find_product_by_name(product_name)? else {
                    println!("Product '{product_name}' not found.");
                    return Ok(());
                };
                let Some(supplier) = tx.find_supplier_by_name(supplier_name)? else {
                    println!("Supplier '{supplier_name}' not found.");
                    return Ok(());
                };
                let date = order_date.to_string();
                tx.insert_order(product.id, supplier.id, *quantity, &date)?;
                tx.add_product_stock(product.id, *quantity)?;
                tx.commit()?;
                println!(
                    "Order placed for {quantity} units of '{product_name}' from '{supplier_name}' on {date}."
                );
                Ok(())
            }
            cli::OrderCmd::List => {
                let tx = store.begin_tx()?;
                let orders = tx.list_orders()?;
                tx.commit()?;
                if orders.is_empty() {
                    println!("No orders found.");
                } else {
                    for listing in orders {
                        let o = &listing.order;
                        println!(
                            "Order ID: {}, Product: {}, Supplier: {}, Quantity: {}, Date: {}",
                            o.id, listing.product_name, listing.supplier_name, o.quantity, o.order_date
                        );
                    }
                }
                Ok(())
            }
        }
    }
}
