#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub stock_level: i64,
    pub price: f64,
    pub supplier_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact_info: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub supplier_id: i64,
    pub quantity: i64,
    pub order_date: String,
}

/// Product row joined with its supplier's name for `product list`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductListing {
    pub product: Product,
    pub supplier_name: String,
}

/// Order row joined with product and supplier names for `order list`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderListing {
    pub order: Order,
    pub product_name: String,
    pub supplier_name: String,
}
