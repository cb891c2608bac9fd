use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

use super::{
    records::{Order, OrderListing, Product, ProductListing, Supplier},
    traits::{Storage, StorageRead, StorageTx, StorageWrite},
};

const DB_SCHEMA_VERSION: i64 = 1;

/// Name printed for a listing whose referenced row has been removed.
const DELETED_NAME: &str = "(deleted)";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database schema version mismatch: found {found}, expected {expected}; run with --reset to start fresh")]
    SchemaVersionMismatch { found: i64, expected: i64 },
}

#[derive(Clone)]
pub struct SqliteStore {
    pub path: String,
}

pub struct SqliteTx {
    conn: Connection,
}

impl StorageTx for SqliteTx {
    fn commit(self) -> Result<()> {
        self.conn.execute("COMMIT", [])?;
        Ok(())
    }
}

fn map_product_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        stock_level: row.get(2)?,
        price: row.get(3)?,
        supplier_id: row.get(4)?,
    })
}

fn map_supplier_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Supplier> {
    Ok(Supplier {
        id: row.get(0)?,
        name: row.get(1)?,
        contact_info: row.get(2)?,
    })
}

fn db_find_product_by_name(conn: &Connection, name: &str) -> rusqlite::Result<Option<Product>> {
    conn.query_row(
        "SELECT id, product_name, stock_level, price, supplier_id
         FROM inventory WHERE product_name = ?1 ORDER BY id LIMIT 1",
        params![name],
        map_product_row,
    )
    .optional()
}

fn db_find_supplier_by_name(conn: &Connection, name: &str) -> rusqlite::Result<Option<Supplier>> {
    conn.query_row(
        "SELECT id, name, contact_info FROM suppliers WHERE name = ?1 ORDER BY id LIMIT 1",
        params![name],
        map_supplier_row,
    )
    .optional()
}

fn db_list_products(conn: &Connection) -> rusqlite::Result<Vec<ProductListing>> {
    let mut stmt = conn.prepare(
        "SELECT i.id, i.product_name, i.stock_level, i.price, i.supplier_id, s.name
         FROM inventory i LEFT JOIN suppliers s ON s.id = i.supplier_id
         ORDER BY i.id",
    )?;
    let mapped = stmt
        .query_map([], |row| {
            let product = map_product_row(row)?;
            let supplier_name: Option<String> = row.get(5)?;
            Ok(ProductListing {
                product,
                supplier_name: supplier_name.unwrap_or_else(|| DELETED_NAME.to_string()),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(mapped)
}

fn db_list_suppliers(conn: &Connection) -> rusqlite::Result<Vec<Supplier>> {
    let mut stmt = conn.prepare("SELECT id, name, contact_info FROM suppliers ORDER BY id")?;
    let mapped = stmt
        .query_map([], map_supplier_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(mapped)
}

fn db_list_orders(conn: &Connection) -> rusqlite::Result<Vec<OrderListing>> {
    let mut stmt = conn.prepare(
        "SELECT o.id, o.product_id, o.supplier_id, o.quantity, o.order_date, i.product_name, s.name
         FROM orders o
         LEFT JOIN inventory i ON i.id = o.product_id
         LEFT JOIN suppliers s ON s.id = o.supplier_id
         ORDER BY o.id",
    )?;
    let mapped = stmt
        .query_map([], |row| {
            let order = Order {
                id: row.get(0)?,
                product_id: row.get(1)?,
                supplier_id: row.get(2)?,
                quantity: row.get(3)?,
                order_date: row.get(4)?,
            };
            let product_name: Option<String> = row.get(5)?;
            let supplier_name: Option<String> = row.get(6)?;
            Ok(OrderListing {
                order,
                product_name: product_name.unwrap_or_else(|| DELETED_NAME.to_string()),
                supplier_name: supplier_name.unwrap_or_else(|| DELETED_NAME.to_string()),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(mapped)
}

fn db_products_below(conn: &Connection, threshold: i64) -> rusqlite::Result<Vec<Product>> {
    let mut stmt = conn.prepare(
        "SELECT id, product_name, stock_level, price, supplier_id
         FROM inventory WHERE stock_level < ?1 ORDER BY id",
    )?;
    let mapped = stmt
        .query_map(params![threshold], map_product_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(mapped)
}

fn db_insert_product(
    conn: &Connection,
    name: &str,
    stock_level: i64,
    price: f64,
    supplier_id: i64,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO inventory (product_name, stock_level, price, supplier_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![name, stock_level, price, supplier_id],
    )?;
    Ok(())
}

fn db_insert_supplier(conn: &Connection, name: &str, contact_info: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO suppliers (name, contact_info) VALUES (?1, ?2)",
        params![name, contact_info],
    )?;
    Ok(())
}

fn db_insert_order(
    conn: &Connection,
    product_id: i64,
    supplier_id: i64,
    quantity: i64,
    order_date: &str,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO orders (product_id, supplier_id, quantity, order_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![product_id, supplier_id, quantity, order_date],
    )?;
    Ok(())
}

fn db_set_product_stock(conn: &Connection, product_id: i64, stock_level: i64) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE inventory SET stock_level = ?1 WHERE id = ?2",
        params![stock_level, product_id],
    )?;
    Ok(())
}

fn db_add_product_stock(conn: &Connection, product_id: i64, delta: i64) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE inventory SET stock_level = stock_level + ?1 WHERE id = ?2",
        params![delta, product_id],
    )?;
    Ok(())
}

fn db_set_supplier_contact(
    conn: &Connection,
    supplier_id: i64,
    contact_info: &str,
) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE suppliers SET contact_info = ?1 WHERE id = ?2",
        params![contact_info, supplier_id],
    )?;
    Ok(())
}

fn db_delete_product(conn: &Connection, product_id: i64) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM inventory WHERE id = ?1", params![product_id])?;
    Ok(())
}

fn db_delete_supplier(conn: &Connection, supplier_id: i64) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM suppliers WHERE id = ?1", params![supplier_id])?;
    Ok(())
}

impl StorageRead for SqliteTx {
    fn find_product_by_name(&self, name: &str) -> Result<Option<Product>> {
        Ok(db_find_product_by_name(&self.conn, name)?)
    }

    fn find_supplier_by_name(&self, name: &str) -> Result<Option<Supplier>> {
        Ok(db_find_supplier_by_name(&self.conn, name)?)
    }

    fn list_products(&self) -> Result<Vec<ProductListing>> {
        Ok(db_list_products(&self.conn)?)
    }

    fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        Ok(db_list_suppliers(&self.conn)?)
    }

    fn list_orders(&self) -> Result<Vec<OrderListing>> {
        Ok(db_list_orders(&self.conn)?)
    }

    fn products_below(&self, threshold: i64) -> Result<Vec<Product>> {
        Ok(db_products_below(&self.conn, threshold)?)
    }
}

impl StorageWrite for SqliteTx {
    fn insert_product(
        &self,
        name: &str,
        stock_level: i64,
        price: f64,
        supplier_id: i64,
    ) -> Result<()> {
        Ok(db_insert_product(
            &self.conn,
            name,
            stock_level,
            price,
            supplier_id,
        )?)
    }

    fn insert_supplier(&self, name: &str, contact_info: &str) -> Result<()> {
        Ok(db_insert_supplier(&self.conn, name, contact_info)?)
    }

    fn insert_order(
        &self,
        product_id: i64,
        supplier_id: i64,
        quantity: i64,
        order_date: &str,
    ) -> Result<()> {
        Ok(db_insert_order(
            &self.conn,
            product_id,
            supplier_id,
            quantity,
            order_date,
        )?)
    }

    fn set_product_stock(&self, product_id: i64, stock_level: i64) -> Result<()> {
        Ok(db_set_product_stock(&self.conn, product_id, stock_level)?)
    }

    fn add_product_stock(&self, product_id: i64, delta: i64) -> Result<()> {
        Ok(db_add_product_stock(&self.conn, product_id, delta)?)
    }

    fn set_supplier_contact(&self, supplier_id: i64, contact_info: &str) -> Result<()> {
        Ok(db_set_supplier_contact(&self.conn, supplier_id, contact_info)?)
    }

    fn delete_product(&self, product_id: i64) -> Result<()> {
        Ok(db_delete_product(&self.conn, product_id)?)
    }

    fn delete_supplier(&self, supplier_id: i64) -> Result<()> {
        Ok(db_delete_supplier(&self.conn, supplier_id)?)
    }
}

impl Storage for SqliteStore {
    type Tx = SqliteTx;

    fn begin_tx(&self) -> Result<Self::Tx> {
        let conn = self.open_conn()?;
        conn.execute("BEGIN IMMEDIATE", [])?;
        Ok(SqliteTx { conn })
    }
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }

    /// Remove the backing database file to force a clean start.
    pub fn reset_all(&self) -> Result<()> {
        if !Path::new(&self.path).exists() {
            return Ok(());
        }
        std::fs::remove_file(&self.path)?;
        Ok(())
    }

    /// Ensure the schema exists. Idempotent; fails on version mismatch or
    /// unrecoverable I/O errors.
    pub fn init(&self) -> Result<()> {
        self.open_conn()?;
        Ok(())
    }

    fn open_conn(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.busy_timeout(std::time::Duration::from_millis(500))?;

        Self::migrate(&conn)?;
        Ok(conn)
    }

    fn migrate(conn: &Connection) -> Result<()> {
        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version == DB_SCHEMA_VERSION {
            return Ok(());
        }

        if version == 0 {
            log::info!("installing schema version {}", DB_SCHEMA_VERSION);
            conn.execute_batch(
                r#"
            CREATE TABLE suppliers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                contact_info TEXT NOT NULL
            );
            CREATE INDEX suppliers_name_idx ON suppliers(name);
            CREATE TABLE inventory (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_name TEXT NOT NULL,
                stock_level INTEGER NOT NULL,
                price REAL NOT NULL,
                supplier_id INTEGER NOT NULL REFERENCES suppliers(id)
            );
            CREATE INDEX inventory_product_name_idx ON inventory(product_name);
            CREATE TABLE orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_id INTEGER NOT NULL REFERENCES inventory(id),
                supplier_id INTEGER NOT NULL REFERENCES suppliers(id),
                quantity INTEGER NOT NULL,
                order_date TEXT NOT NULL
            );
        "#,
            )?;
            conn.pragma_update(None, "user_version", DB_SCHEMA_VERSION)?;
            return Ok(());
        }

        Err(StoreError::SchemaVersionMismatch {
            found: version,
            expected: DB_SCHEMA_VERSION,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_file(prefix: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        p.push(format!("{}_{}.db", prefix, nanos));
        p
    }

    fn seeded_store(prefix: &str) -> SqliteStore {
        let store = SqliteStore::new(unique_temp_file(prefix));
        store.init().unwrap();
        store
    }

    #[test]
    fn reset_all_ok_when_missing() {
        let path = unique_temp_file("stockroom_reset");
        let store = SqliteStore::new(&path);
        store.reset_all().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn reset_all_removes_existing_file() {
        let path = unique_temp_file("stockroom_reset");
        std::fs::write(&path, b"dummy").unwrap();
        assert!(path.exists());
        let store = SqliteStore::new(&path);
        store.reset_all().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn init_installs_schema() {
        let path = unique_temp_file("stockroom_init");
        let store = SqliteStore::new(&path);
        store.init().unwrap();

        assert!(path.exists());

        let conn = Connection::open(&path).unwrap();
        for table in ["suppliers", "inventory", "orders"] {
            let found = conn
                .query_row(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    params![table],
                    |row| row.get::<_, String>(0),
                )
                .optional()
                .unwrap();
            assert_eq!(found.as_deref(), Some(table));
        }

        let version: i64 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, DB_SCHEMA_VERSION);

        // and again, idempotently
        store.init().unwrap();
    }

    #[test]
    fn init_fails_on_mismatched_schema_version() {
        let path = unique_temp_file("stockroom_bad_version");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("PRAGMA user_version = 999;").unwrap();
        drop(conn);

        let store = SqliteStore::new(&path);
        let err = store
            .init()
            .expect_err("init should fail on version mismatch");
        let msg = format!("{err}");
        assert!(msg.contains("schema version mismatch"));
        assert!(msg.contains("--reset"));
    }

    #[test]
    fn insert_then_find_product_round_trips() {
        let store = seeded_store("stockroom_find");
        let tx = store.begin_tx().unwrap();
        tx.insert_supplier("Acme", "acme@example.com").unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        tx.insert_product("Widget", 10, 2.5, supplier.id).unwrap();
        tx.commit().unwrap();

        let tx = store.begin_tx().unwrap();
        let product = tx.find_product_by_name("Widget").unwrap().unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.stock_level, 10);
        assert_eq!(product.price, 2.5);
        assert_eq!(product.supplier_id, supplier.id);

        assert!(tx.find_product_by_name("Gadget").unwrap().is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_lowest_id() {
        let store = seeded_store("stockroom_dup");
        let tx = store.begin_tx().unwrap();
        tx.insert_supplier("Acme", "first@example.com").unwrap();
        tx.insert_supplier("Acme", "second@example.com").unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        tx.insert_product("Widget", 1, 1.0, supplier.id).unwrap();
        tx.insert_product("Widget", 2, 2.0, supplier.id).unwrap();
        tx.commit().unwrap();

        let tx = store.begin_tx().unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        assert_eq!(supplier.contact_info, "first@example.com");
        let product = tx.find_product_by_name("Widget").unwrap().unwrap();
        assert_eq!(product.stock_level, 1);
    }

    #[test]
    fn products_below_compares_numerically() {
        let store = seeded_store("stockroom_low");
        let tx = store.begin_tx().unwrap();
        tx.insert_supplier("Acme", "acme@example.com").unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        // "10" < "9" lexically; numerically the other way around.
        tx.insert_product("Nine", 9, 1.0, supplier.id).unwrap();
        tx.insert_product("Ten", 10, 1.0, supplier.id).unwrap();
        tx.insert_product("Three", 3, 1.0, supplier.id).unwrap();
        tx.commit().unwrap();

        let tx = store.begin_tx().unwrap();
        let below_ten = tx.products_below(10).unwrap();
        let names: Vec<&str> = below_ten.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Nine", "Three"]);

        let below_five = tx.products_below(5).unwrap();
        let names: Vec<&str> = below_five.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Three"]);
    }

    #[test]
    fn add_product_stock_increments_in_place() {
        let store = seeded_store("stockroom_incr");
        let tx = store.begin_tx().unwrap();
        tx.insert_supplier("Acme", "acme@example.com").unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        tx.insert_product("Widget", 10, 2.5, supplier.id).unwrap();
        let product = tx.find_product_by_name("Widget").unwrap().unwrap();
        tx.add_product_stock(product.id, 5).unwrap();
        tx.commit().unwrap();

        let tx = store.begin_tx().unwrap();
        let product = tx.find_product_by_name("Widget").unwrap().unwrap();
        assert_eq!(product.stock_level, 15);
    }

    #[test]
    fn set_product_stock_overwrites() {
        let store = seeded_store("stockroom_set");
        let tx = store.begin_tx().unwrap();
        tx.insert_supplier("Acme", "acme@example.com").unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        tx.insert_product("Widget", 10, 2.5, supplier.id).unwrap();
        let product = tx.find_product_by_name("Widget").unwrap().unwrap();
        tx.set_product_stock(product.id, -3).unwrap();
        tx.commit().unwrap();

        let tx = store.begin_tx().unwrap();
        let product = tx.find_product_by_name("Widget").unwrap().unwrap();
        assert_eq!(product.stock_level, -3);
    }

    #[test]
    fn delete_product_removes_row() {
        let store = seeded_store("stockroom_del");
        let tx = store.begin_tx().unwrap();
        tx.insert_supplier("Acme", "acme@example.com").unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        tx.insert_product("Widget", 10, 2.5, supplier.id).unwrap();
        let product = tx.find_product_by_name("Widget").unwrap().unwrap();
        tx.delete_product(product.id).unwrap();
        tx.commit().unwrap();

        let tx = store.begin_tx().unwrap();
        assert!(tx.find_product_by_name("Widget").unwrap().is_none());
        assert!(tx.list_products().unwrap().is_empty());
    }

    #[test]
    fn dropping_tx_without_commit_rolls_back() {
        let store = seeded_store("stockroom_rollback");
        let tx = store.begin_tx().unwrap();
        tx.insert_supplier("Acme", "acme@example.com").unwrap();
        drop(tx);

        let tx = store.begin_tx().unwrap();
        assert!(tx.find_supplier_by_name("Acme").unwrap().is_none());
        assert!(tx.list_suppliers().unwrap().is_empty());
    }

    #[test]
    fn list_orders_joins_product_and_supplier_names() {
        let store = seeded_store("stockroom_orders");
        let tx = store.begin_tx().unwrap();
        tx.insert_supplier("Acme", "acme@example.com").unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        tx.insert_product("Widget", 10, 2.5, supplier.id).unwrap();
        let product = tx.find_product_by_name("Widget").unwrap().unwrap();
        tx.insert_order(product.id, supplier.id, 5, "2024-06-01")
            .unwrap();
        tx.commit().unwrap();

        let tx = store.begin_tx().unwrap();
        let orders = tx.list_orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].product_name, "Widget");
        assert_eq!(orders[0].supplier_name, "Acme");
        assert_eq!(orders[0].order.quantity, 5);
        assert_eq!(orders[0].order.order_date, "2024-06-01");
    }

    #[test]
    fn list_orders_marks_dangling_references() {
        let store = seeded_store("stockroom_dangling");
        let tx = store.begin_tx().unwrap();
        tx.insert_supplier("Acme", "acme@example.com").unwrap();
        let supplier = tx.find_supplier_by_name("Acme").unwrap().unwrap();
        tx.insert_product("Widget", 10, 2.5, supplier.id).unwrap();
        let product = tx.find_product_by_name("Widget").unwrap().unwrap();
        tx.insert_order(product.id, supplier.id, 5, "2024-06-01")
            .unwrap();
        tx.delete_product(product.id).unwrap();
        tx.commit().unwrap();

        let tx = store.begin_tx().unwrap();
        let orders = tx.list_orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].product_name, "(deleted)");
        assert_eq!(orders[0].supplier_name, "Acme");
    }
}
