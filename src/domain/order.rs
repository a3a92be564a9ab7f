use bigdecimal::BigDecimal;

/// One requested order line: which item, how many.
#[derive(Debug, Clone)]
pub struct OrderItemInput {
    pub shop_item_id: i32,
    pub quantity: i32,
}

/// Partial update of an order. A `None` field is left untouched; a present
/// `items` list (even an empty one) replaces the whole child collection.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub customer_id: Option<i32>,
    pub items: Option<Vec<OrderItemInput>>,
}

#[derive(Debug, Clone)]
pub struct CustomerView {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct CategoryView {
    pub id: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ShopItemView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub id: i32,
    pub shop_item_id: i32,
    pub quantity: i32,
    pub shop_item: ShopItemView,
}

/// An order with every relationship resolved. This is the only shape the
/// aggregate exposes to callers; there is no partially loaded view.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: i32,
    pub customer_id: i32,
    pub customer: CustomerView,
    pub items: Vec<OrderItemView>,
}
