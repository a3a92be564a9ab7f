use std::str::FromStr;

use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::category::ShopItemCategory;
use crate::models::shop_item::{
    categories_per_item, replace_item_categories, NewShopItem, ShopItem, ShopItemPatch,
};
use crate::schema::{order_items, shop_item_categories, shop_items};

use super::Pagination;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub title: String,
    pub description: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    /// A present list replaces the item's whole category set.
    pub category_ids: Option<Vec<i32>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: String,
    pub categories: Vec<ShopItemCategory>,
}

impl ItemResponse {
    fn new(item: ShopItem, categories: Vec<ShopItemCategory>) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            price: item.price.to_string(),
            categories,
        }
    }
}

fn parse_price(raw: &str) -> Result<BigDecimal, AppError> {
    BigDecimal::from_str(raw)
        .map_err(|e| AppError::BadRequest(format!("Invalid price '{}': {}", raw, e)))
}

fn ensure_categories_exist(
    conn: &mut PgConnection,
    category_ids: &[i32],
) -> Result<Vec<ShopItemCategory>, AppError> {
    let found: Vec<ShopItemCategory> = shop_item_categories::table
        .filter(shop_item_categories::id.eq_any(category_ids))
        .select(ShopItemCategory::as_select())
        .load(conn)?;
    if found.len() != category_ids.len() {
        return Err(AppError::BadRequest(
            "One or more categories not found".to_string(),
        ));
    }
    Ok(found)
}

fn load_item_response(conn: &mut PgConnection, item: ShopItem) -> Result<ItemResponse, AppError> {
    let categories = categories_per_item(conn, std::slice::from_ref(&item))?
        .pop()
        .unwrap_or_default();
    Ok(ItemResponse::new(item, categories))
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /items
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 400, description = "One or more categories not found"),
    ),
    tag = "items"
)]
pub async fn create_item(
    pool: web::Data<DbPool>,
    body: web::Json<CreateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let CreateItemRequest {
        title,
        description,
        price,
        category_ids,
    } = body.into_inner();

    let item = web::block(move || {
        let mut conn = pool.get()?;
        let price = parse_price(&price)?;

        conn.transaction::<_, AppError, _>(|conn| {
            let categories = ensure_categories_exist(conn, &category_ids)?;
            let item: ShopItem = diesel::insert_into(shop_items::table)
                .values(&NewShopItem {
                    title,
                    description,
                    price,
                })
                .returning(ShopItem::as_returning())
                .get_result(conn)?;
            replace_item_categories(conn, item.id, &category_ids)?;
            Ok(ItemResponse::new(item, categories))
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(item))
}

/// GET /items
#[utoipa::path(
    get,
    path = "/items",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Maximum rows to return (default 100)"),
    ),
    responses(
        (status = 200, description = "List of items with their categories", body = [ItemResponse]),
    ),
    tag = "items"
)]
pub async fn list_items(
    pool: web::Data<DbPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let items = web::block(move || {
        let mut conn = pool.get()?;
        let rows: Vec<ShopItem> = shop_items::table
            .select(ShopItem::as_select())
            .order(shop_items::id.asc())
            .offset(query.skip.max(0))
            .limit(query.limit.max(0))
            .load(&mut conn)?;
        let category_groups = categories_per_item(&mut conn, &rows)?;
        Ok::<_, AppError>(
            rows.into_iter()
                .zip(category_groups)
                .map(|(item, categories)| ItemResponse::new(item, categories))
                .collect::<Vec<_>>(),
        )
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(items))
}

/// GET /items/{id}
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found"),
    ),
    tag = "items"
)]
pub async fn get_item(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let item = web::block(move || {
        let mut conn = pool.get()?;
        let item: ShopItem = shop_items::table
            .find(id)
            .select(ShopItem::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;
        load_item_response(&mut conn, item)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(item))
}

/// PUT /items/{id}
///
/// Partial update. A present `category_ids` replaces the association set
/// wholesale after validating that every referenced category exists.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = i32, Path, description = "Item id")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, description = "One or more categories not found"),
        (status = 404, description = "Item not found"),
    ),
    tag = "items"
)]
pub async fn update_item(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let UpdateItemRequest {
        title,
        description,
        price,
        category_ids,
    } = body.into_inner();

    let item = web::block(move || {
        let mut conn = pool.get()?;
        let price = price.as_deref().map(parse_price).transpose()?;

        conn.transaction::<_, AppError, _>(|conn| {
            let found = shop_items::table
                .find(id)
                .select(shop_items::id)
                .first::<i32>(conn)
                .optional()?;
            if found.is_none() {
                return Err(AppError::NotFound("Item not found".to_string()));
            }

            if let Some(ids) = &category_ids {
                ensure_categories_exist(conn, ids)?;
            }

            let patch = ShopItemPatch {
                title,
                description,
                price,
            };
            if !patch.is_empty() {
                diesel::update(shop_items::table.find(id))
                    .set(&patch)
                    .execute(conn)?;
            }
            if let Some(ids) = &category_ids {
                replace_item_categories(conn, id, ids)?;
            }

            let item: ShopItem = shop_items::table
                .find(id)
                .select(ShopItem::as_select())
                .first(conn)?;
            load_item_response(conn, item)
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(item))
}

/// DELETE /items/{id}
///
/// Refused while order items still reference the shop item. Category
/// association rows are dropped by the store.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 400, description = "Item is referenced by existing orders"),
        (status = 404, description = "Item not found"),
    ),
    tag = "items"
)]
pub async fn delete_item(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || {
        let mut conn = pool.get()?;

        let found = shop_items::table
            .find(id)
            .select(shop_items::id)
            .first::<i32>(&mut conn)
            .optional()?;
        if found.is_none() {
            return Err(AppError::NotFound("Item not found".to_string()));
        }

        let referenced: i64 = order_items::table
            .filter(order_items::shop_item_id.eq(id))
            .count()
            .get_result(&mut conn)?;
        if referenced > 0 {
            return Err(AppError::BadRequest(
                "Shop item is referenced by existing orders".to_string(),
            ));
        }

        diesel::delete(shop_items::table.find(id)).execute(&mut conn)?;
        Ok(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({ "message": "Item deleted successfully" })))
}
