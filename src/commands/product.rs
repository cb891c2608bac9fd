use super::CommandRunner;
use crate::cli;
use crate::storage::{Storage, StorageRead, StorageTx, StorageWrite};
use anyhow::Result;

impl CommandRunner for cli::ProductCmd {
    fn run<S: Storage>(&self, store: &S) -> Result<()> {
        match self {
            cli::ProductCmd::Add {
                name,
                stock_level,
                price,
                supplier_name,
            } => {
                let tx = store.begin_tx()?;
                let Some(supplier) = tx.find_supplier_by_name(supplier_name)? else {
                    println!("Supplier '{supplier_name}' not found.");
                    return Ok(());
                };
                tx.insert_product(name, *stock_level, *price, supplier.id)?;
                tx.commit()?;
                println!("Product '{name}' added to inventory.");
                Ok(())
            }
            cli::ProductCmd::List => {
                let tx = store.begin_tx()?;
                let products = tx.list_products()?;
                tx.commit()?;
                if products.is_empty() {
                    println!("No products found in the inventory.");
                } else {
                    for listing in products {
                        let p = &listing.product;
                        println!(
                            "ID: {}, Name: {}, Stock: {}, Price: {}, Supplier: {}",
                            p.id, p.name, p.stock_level, p.price, listing.supplier_name
                        );
                    }
                }
                Ok(())
            }
            cli::ProductCmd::UpdateStock {
                product_name,
                new_stock,
            } => {
                let tx = store.begin_tx()?;
                let Some(product) = tx.find_product_by_name(product_name)? else {
                    println!("Product '{product_name}' not found.");
                    return Ok(());
                };
                tx.set_product_stock(product.id, *new_stock)?;
                tx.commit()?;
                println!("Stock for '{product_name}' updated to {new_stock}.");
                Ok(())
            }
            cli::ProductCmd::Remove { product_name } => {
                let tx = store.begin_tx()?;
                let Some(product) = tx.find_product_by_name(product_name)? else {
                    println!("Product '{product_name}' not found.");
                    return Ok(());
                };
                tx.delete_product(product.id)?;
                tx.commit()?;
                println!("Product '{product_name}' removed from inventory.");
                Ok(())
            }
            cli::ProductCmd::LowStock { threshold } => {
                let tx = store.begin_tx()?;
                let products = tx.products_below(*threshold)?;
                tx.commit()?;
                if products.is_empty() {
                    println!("No products below stock threshold of {threshold}.");
                } else {
                    for p in products {
                        println!("Product: {}, Stock: {}", p.name, p.stock_level);
                    }
                }
                Ok(())
            }
        }
    }
}
