use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::schema::shop_item_categories;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable, ToSchema)]
#[diesel(table_name = shop_item_categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShopItemCategory {
    pub id: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = shop_item_categories)]
pub struct NewShopItemCategory {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = shop_item_categories)]
pub struct ShopItemCategoryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ShopItemCategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
