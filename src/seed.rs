use std::str::FromStr;

use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::infrastructure::models::{NewOrderItemRow, NewOrderRow};
use crate::models::category::NewShopItemCategory;
use crate::models::customer::NewCustomer;
use crate::models::shop_item::{NewShopItem, ShopItemCategoryLink};
use crate::schema::{
    customers, order_items, orders, shop_item_categories, shop_item_category_association,
    shop_items,
};

/// Insert a small demo data set on first startup. Skipped when any customer
/// already exists.
pub fn create_demo_data(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for seeding");

    let existing: i64 = customers::table
        .count()
        .get_result(&mut conn)
        .expect("Failed to check for existing data");
    if existing > 0 {
        return;
    }

    log::info!("Seeding demo data");

    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let new_customer = |name: &str, surname: &str, email: &str| NewCustomer {
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
        };
        let customer_ids: Vec<i32> = diesel::insert_into(customers::table)
            .values(&vec![
                new_customer("John", "Doe", "john.doe@example.com"),
                new_customer("Jane", "Smith", "jane.smith@example.com"),
                new_customer("Bob", "Johnson", "bob.johnson@example.com"),
            ])
            .returning(customers::id)
            .get_results(conn)?;

        let new_category = |title: &str, description: &str| NewShopItemCategory {
            title: title.to_string(),
            description: description.to_string(),
        };
        let category_ids: Vec<i32> = diesel::insert_into(shop_item_categories::table)
            .values(&vec![
                new_category("Electronics", "Electronic devices and gadgets"),
                new_category("Books", "Books of various genres"),
                new_category("Clothing", "Apparel and accessories"),
                new_category("Home & Garden", "Home improvement and garden items"),
            ])
            .returning(shop_item_categories::id)
            .get_results(conn)?;

        let new_item = |title: &str, description: &str, price: &str| NewShopItem {
            title: title.to_string(),
            description: description.to_string(),
            price: BigDecimal::from_str(price).expect("valid demo price"),
        };
        let item_ids: Vec<i32> = diesel::insert_into(shop_items::table)
            .values(&vec![
                new_item("Smartphone", "Latest model smartphone", "599.99"),
                new_item("Laptop", "High-performance laptop", "1299.99"),
                new_item("Python Programming Book", "Learn Python programming", "39.99"),
                new_item("T-Shirt", "Comfortable cotton t-shirt", "19.99"),
                new_item("Garden Hose", "50ft garden hose", "29.99"),
            ])
            .returning(shop_items::id)
            .get_results(conn)?;

        // Smartphone and Laptop → Electronics; Book → Books; T-Shirt →
        // Clothing; Garden Hose → Home & Garden.
        let links: Vec<ShopItemCategoryLink> = [(0, 0), (1, 0), (2, 1), (3, 2), (4, 3)]
            .into_iter()
            .map(|(item, category): (usize, usize)| ShopItemCategoryLink {
                shop_item_id: item_ids[item],
                category_id: category_ids[category],
            })
            .collect();
        diesel::insert_into(shop_item_category_association::table)
            .values(&links)
            .execute(conn)?;

        let order_ids: Vec<i32> = diesel::insert_into(orders::table)
            .values(&vec![
                NewOrderRow {
                    customer_id: customer_ids[0],
                },
                NewOrderRow {
                    customer_id: customer_ids[1],
                },
            ])
            .returning(orders::id)
            .get_results(conn)?;

        diesel::insert_into(order_items::table)
            .values(&vec![
                NewOrderItemRow {
                    order_id: order_ids[0],
                    shop_item_id: item_ids[0],
                    quantity: 1,
                },
                NewOrderItemRow {
                    order_id: order_ids[0],
                    shop_item_id: item_ids[2],
                    quantity: 2,
                },
                NewOrderItemRow {
                    order_id: order_ids[1],
                    shop_item_id: item_ids[1],
                    quantity: 1,
                },
                NewOrderItemRow {
                    order_id: order_ids[1],
                    shop_item_id: item_ids[3],
                    quantity: 3,
                },
            ])
            .execute(conn)?;

        Ok(())
    })
    .expect("Failed to seed demo data");
}
