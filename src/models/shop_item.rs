use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::category::ShopItemCategory;
use crate::schema::{shop_item_categories, shop_item_category_association, shop_items};

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = shop_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShopItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = shop_items)]
pub struct NewShopItem {
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = shop_items)]
pub struct ShopItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
}

impl ShopItemPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.price.is_none()
    }
}

/// Row of the many-to-many join table between shop items and categories.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Insertable)]
#[diesel(table_name = shop_item_category_association)]
#[diesel(primary_key(shop_item_id, category_id))]
#[diesel(belongs_to(ShopItem))]
#[diesel(belongs_to(ShopItemCategory, foreign_key = category_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShopItemCategoryLink {
    pub shop_item_id: i32,
    pub category_id: i32,
}

/// Load the categories of each item, in the same order as `items`.
pub fn categories_per_item(
    conn: &mut PgConnection,
    items: &[ShopItem],
) -> QueryResult<Vec<Vec<ShopItemCategory>>> {
    let links: Vec<(ShopItemCategoryLink, ShopItemCategory)> =
        ShopItemCategoryLink::belonging_to(items)
            .inner_join(shop_item_categories::table)
            .select((
                ShopItemCategoryLink::as_select(),
                ShopItemCategory::as_select(),
            ))
            .load(conn)?;

    Ok(links
        .grouped_by(items)
        .into_iter()
        .map(|group| group.into_iter().map(|(_, category)| category).collect())
        .collect())
}

/// Replace the category set of one item with `category_ids`.
pub fn replace_item_categories(
    conn: &mut PgConnection,
    item_id: i32,
    category_ids: &[i32],
) -> QueryResult<()> {
    diesel::delete(
        shop_item_category_association::table
            .filter(shop_item_category_association::shop_item_id.eq(item_id)),
    )
    .execute(conn)?;

    let links: Vec<ShopItemCategoryLink> = category_ids
        .iter()
        .map(|&category_id| ShopItemCategoryLink {
            shop_item_id: item_id,
            category_id,
        })
        .collect();
    if !links.is_empty() {
        diesel::insert_into(shop_item_category_association::table)
            .values(&links)
            .execute(conn)?;
    }
    Ok(())
}
