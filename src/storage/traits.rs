use anyhow::Result;

use super::records::{OrderListing, Product, ProductListing, Supplier};

pub trait StorageRead {
    /// First-match lookup by product name; lowest id wins on duplicates.
    fn find_product_by_name(&self, name: &str) -> Result<Option<Product>>;
    /// First-match lookup by supplier name; lowest id wins on duplicates.
    fn find_supplier_by_name(&self, name: &str) -> Result<Option<Supplier>>;
    fn list_products(&self) -> Result<Vec<ProductListing>>;
    fn list_suppliers(&self) -> Result<Vec<Supplier>>;
    fn list_orders(&self) -> Result<Vec<OrderListing>>;
    /// Products whose stock_level is strictly below the threshold (numeric).
    fn products_below(&self, threshold: i64) -> Result<Vec<Product>>;
}

pub trait StorageWrite {
    fn insert_product(
        &self,
        name: &str,
        stock_level: i64,
        price: f64,
        supplier_id: i64,
    ) -> Result<()>;
    fn insert_supplier(&self, name: &str, contact_info: &str) -> Result<()>;
    fn insert_order(
        &self,
        product_id: i64,
        supplier_id: i64,
        quantity: i64,
        order_date: &str,
    ) -> Result<()>;
    fn set_product_stock(&self, product_id: i64, stock_level: i64) -> Result<()>;
    /// Atomic in-database increment; the caller never read-modify-writes.
    fn add_product_stock(&self, product_id: i64, delta: i64) -> Result<()>;
    fn set_supplier_contact(&self, supplier_id: i64, contact_info: &str) -> Result<()>;
    fn delete_product(&self, product_id: i64) -> Result<()>;
    fn delete_supplier(&self, supplier_id: i64) -> Result<()>;
}

/// A unit of work. Writes are pending until `commit`; dropping the
/// transaction without committing rolls everything back.
pub trait StorageTx: StorageRead + StorageWrite {
    fn commit(self) -> Result<()>;
}

pub trait Storage {
    type Tx: StorageTx;

    fn begin_tx(&self) -> Result<Self::Tx>;
}
