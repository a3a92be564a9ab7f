use actix_web::{web, HttpResponse};
use diesel::prelude::*;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::category::{NewShopItemCategory, ShopItemCategory, ShopItemCategoryPatch};
use crate::schema::shop_item_categories;

use super::Pagination;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// POST /categories
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = ShopItemCategory),
    ),
    tag = "categories"
)]
pub async fn create_category(
    pool: web::Data<DbPool>,
    body: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let category = web::block(move || {
        let mut conn = pool.get()?;
        let category: ShopItemCategory = diesel::insert_into(shop_item_categories::table)
            .values(&NewShopItemCategory {
                title: body.title,
                description: body.description,
            })
            .returning(ShopItemCategory::as_returning())
            .get_result(&mut conn)?;
        Ok::<_, AppError>(category)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(category))
}

/// GET /categories
#[utoipa::path(
    get,
    path = "/categories",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Maximum rows to return (default 100)"),
    ),
    responses(
        (status = 200, description = "List of categories", body = [ShopItemCategory]),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    pool: web::Data<DbPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let rows = web::block(move || {
        let mut conn = pool.get()?;
        let rows: Vec<ShopItemCategory> = shop_item_categories::table
            .select(ShopItemCategory::as_select())
            .order(shop_item_categories::id.asc())
            .offset(query.skip.max(0))
            .limit(query.limit.max(0))
            .load(&mut conn)?;
        Ok::<_, AppError>(rows)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /categories/{id}
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = ShopItemCategory),
        (status = 404, description = "Category not found"),
    ),
    tag = "categories"
)]
pub async fn get_category(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let category = web::block(move || {
        let mut conn = pool.get()?;
        shop_item_categories::table
            .find(id)
            .select(ShopItemCategory::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(category))
}

/// PUT /categories/{id}
#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ShopItemCategory),
        (status = 404, description = "Category not found"),
    ),
    tag = "categories"
)]
pub async fn update_category(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let body = body.into_inner();

    let category = web::block(move || {
        let mut conn = pool.get()?;

        let existing: ShopItemCategory = shop_item_categories::table
            .find(id)
            .select(ShopItemCategory::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let patch = ShopItemCategoryPatch {
            title: body.title,
            description: body.description,
        };
        if patch.is_empty() {
            return Ok::<_, AppError>(existing);
        }

        let updated: ShopItemCategory = diesel::update(shop_item_categories::table.find(id))
            .set(&patch)
            .returning(ShopItemCategory::as_returning())
            .get_result(&mut conn)?;
        Ok(updated)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(category))
}

/// DELETE /categories/{id}
///
/// Association rows to shop items are dropped by the store; the items
/// themselves are untouched.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found"),
    ),
    tag = "categories"
)]
pub async fn delete_category(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || {
        let mut conn = pool.get()?;

        let found = shop_item_categories::table
            .find(id)
            .select(shop_item_categories::id)
            .first::<i32>(&mut conn)
            .optional()?;
        if found.is_none() {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        diesel::delete(shop_item_categories::table.find(id)).execute(&mut conn)?;
        Ok(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({ "message": "Category deleted successfully" })))
}
