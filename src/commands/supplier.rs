use super::CommandRunner;
use crate::cli;
use crate::storage::{Storage, StorageRead, StorageTx, StorageWrite};
use anyhow::Result;

impl CommandRunner for cli::SupplierCmd {
    fn run<S: Storage>(&self, store: &S) -> Result<()> {
        match self {
            cli::SupplierCmd::Add { name, contact_info } => {
                let tx = store.begin_tx()?;
                tx.insert_supplier(name, contact_info)?;
                tx.commit()?;
                println!("Supplier '{name}' added.");
                Ok(())
            }
            cli::SupplierCmd::List => {
                let tx = store.begin_tx()?;
                let suppliers = tx.list_suppliers()?;
                tx.commit()?;
                if suppliers.is_empty() {
                    println!("No suppliers found.");
                } else {
                    for s in suppliers {
                        println!(
                            "ID: {}, Name: {}, Contact Info: {}",
                            s.id, s.name, s.contact_info
                        );
                    }
                }
                Ok(())
            }
            cli::SupplierCmd::UpdateContact {
                supplier_name,
                new_contact_info,
            } => {
                let tx = store.begin_tx()?;
                let Some(supplier) = tx.find_supplier_by_name(supplier_name)? else {
                    println!("Supplier '{supplier_name}' not found.");
                    return Ok(());
                };
                tx.set_supplier_contact(supplier.id, new_contact_info)?;
                tx.commit()?;
                println!("Contact info for '{supplier_name}' updated.");
                Ok(())
            }
            cli::SupplierCmd::Remove { supplier_name } => {
                let tx = store.begin_tx()?;
                let Some(supplier) = tx.find_supplier_by_name(supplier_name)? else {
                    println!("Supplier '{supplier_name}' not found.");
                    return Ok(());
                };
                tx.delete_supplier(supplier.id)?;
                tx.commit()?;
                println!("Supplier '{supplier_name}' removed.");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, SqliteStore) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(dir.path().join("stockroom.sqlite"));
        store.init().unwrap();
        (dir, store)
    }

    #[test]
    fn add_then_update_contact() {
        let (_dir, store) = temp_store();
        cli::SupplierCmd::Add {
            name: "Acme".to_string(),
            contact_info: "old@example.com".to_string(),
        }
        .run(&store)
        .unwrap();

        cli::SupplierCmd::UpdateContact {
            supplier_name: "Acme".to_string(),
            new_contact_info: "new@example.com".to_string(),
        }
        .run(&store)
        .unwrap();

        let tx = store.begin_tx().unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        assert_eq!(supplier.contact_info, "new@example.com");
    }

    #[test]
    fn update_contact_for_missing_supplier_changes_nothing() {
        let (_dir, store) = temp_store();
        cli::SupplierCmd::Add {
            name: "Acme".to_string(),
            contact_info: "old@example.com".to_string(),
        }
        .run(&store)
        .unwrap();

        cli::SupplierCmd::UpdateContact {
            supplier_name: "Nobody".to_string(),
            new_contact_info: "new@example.com".to_string(),
        }
        .run(&store)
        .unwrap();

        let tx = store.begin_tx().unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        assert_eq!(supplier.contact_info, "old@example.com");
    }

    #[test]
    fn remove_missing_supplier_is_a_clean_noop() {
        let (_dir, store) = temp_store();
        cli::SupplierCmd::Remove {
            supplier_name: "Nobody".to_string(),
        }
        .run(&store)
        .unwrap();

        let tx = store.begin_tx().unwrap();
        assert!(tx.list_suppliers().unwrap().is_empty());
    }

    #[test]
    fn remove_deletes_the_supplier() {
        let (_dir, store) = temp_store();
        cli::SupplierCmd::Add {
            name: "Acme".to_string(),
            contact_info: "acme@example.com".to_string(),
        }
        .run(&store)
        .unwrap();

        cli::SupplierCmd::Remove {
            supplier_name: "Acme".to_string(),
        }
        .run(&store)
        .unwrap();

        let tx = store.begin_tx().unwrap();
        assert!(tx.list_suppliers().unwrap().is_empty());
    }
}
