use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::order::{
    CategoryView, CustomerView, OrderItemInput, OrderItemView, OrderPatch, OrderView,
    ShopItemView,
};
use crate::errors::AppError;
use crate::infrastructure::order_repo::DieselOrderRepository;

use super::Pagination;

pub type ShopOrderService = OrderService<DieselOrderRepository>;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    pub shop_item_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: i32,
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
}

/// Both fields are optional; an absent `items` keeps the existing item list,
/// while a present one (even `[]`) replaces it entirely.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub customer_id: Option<i32>,
    pub items: Option<Vec<OrderItemRequest>>,
}

impl From<OrderItemRequest> for OrderItemInput {
    fn from(r: OrderItemRequest) -> Self {
        Self {
            shop_item_id: r.shop_item_id,
            quantity: r.quantity,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShopItemResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: String,
    pub categories: Vec<CategoryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: i32,
    pub shop_item_id: i32,
    pub quantity: i32,
    pub shop_item: ShopItemResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub customer_id: i32,
    pub customer: CustomerResponse,
    pub items: Vec<OrderItemResponse>,
}

impl From<CustomerView> for CustomerResponse {
    fn from(v: CustomerView) -> Self {
        Self {
            id: v.id,
            name: v.name,
            surname: v.surname,
            email: v.email,
        }
    }
}

impl From<CategoryView> for CategoryResponse {
    fn from(v: CategoryView) -> Self {
        Self {
            id: v.id,
            title: v.title,
            description: v.description,
        }
    }
}

impl From<ShopItemView> for ShopItemResponse {
    fn from(v: ShopItemView) -> Self {
        Self {
            id: v.id,
            title: v.title,
            description: v.description,
            price: v.price.to_string(),
            categories: v.categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<OrderItemView> for OrderItemResponse {
    fn from(v: OrderItemView) -> Self {
        Self {
            id: v.id,
            shop_item_id: v.shop_item_id,
            quantity: v.quantity,
            shop_item: v.shop_item.into(),
        }
    }
}

impl From<OrderView> for OrderResponse {
    fn from(v: OrderView) -> Self {
        Self {
            id: v.id,
            customer_id: v.customer_id,
            customer: v.customer.into(),
            items: v.items.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Creates an order together with its items. All referenced entities are
/// validated and all rows written inside a single database transaction, so a
/// failed validation never leaves a partial order behind.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderResponse),
        (status = 400, description = "Customer or shop item not found"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<ShopOrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let service = service.into_inner();

    let order = web::block(move || {
        let items = body.items.into_iter().map(Into::into).collect();
        service
            .create_order(body.customer_id, items)
            .map_err(AppError::from)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Maximum rows to return (default 100)"),
    ),
    responses(
        (status = 200, description = "List of orders, fully resolved", body = [OrderResponse]),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    service: web::Data<ShopOrderService>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let service = service.into_inner();

    let orders = web::block(move || {
        service
            .list_orders(query.skip, query.limit)
            .map_err(AppError::from)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    let responses: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<ShopOrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = service.into_inner();

    let order = web::block(move || service.get_order(id).map_err(AppError::from))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// PUT /orders/{id}
///
/// Partial update of the aggregate. Supplying `items` replaces the whole
/// child collection; omitting it leaves the collection untouched.
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Customer or shop item not found"),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    service: web::Data<ShopOrderService>,
    path: web::Path<i32>,
    body: web::Json<UpdateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let body = body.into_inner();
    let service = service.into_inner();

    let order = web::block(move || {
        let patch = OrderPatch {
            customer_id: body.customer_id,
            items: body
                .items
                .map(|items| items.into_iter().map(Into::into).collect()),
        };
        service.update_order(id, patch).map_err(AppError::from)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// DELETE /orders/{id}
///
/// Returns the order's last full representation; the aggregate is resolved
/// before the rows are removed.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted, last representation returned", body = OrderResponse),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<ShopOrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = service.into_inner();

    let order = web::block(move || service.delete_order(id).map_err(AppError::from))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

#[cfg(test)]
mod tests {
    use super::{CreateOrderRequest, UpdateOrderRequest};

    #[test]
    fn create_request_defaults_items_to_empty() {
        let req: CreateOrderRequest =
            serde_json::from_str(r#"{"customer_id": 1}"#).expect("deserialize");
        assert_eq!(req.customer_id, 1);
        assert!(req.items.is_empty());
    }

    #[test]
    fn absent_items_key_deserializes_to_none() {
        let req: UpdateOrderRequest =
            serde_json::from_str(r#"{"customer_id": 2}"#).expect("deserialize");
        assert_eq!(req.customer_id, Some(2));
        assert!(req.items.is_none());
    }

    #[test]
    fn empty_items_list_deserializes_to_some_empty() {
        let req: UpdateOrderRequest =
            serde_json::from_str(r#"{"items": []}"#).expect("deserialize");
        assert!(req.customer_id.is_none());
        assert_eq!(req.items.expect("items present").len(), 0);
    }

    #[test]
    fn empty_patch_deserializes_to_all_none() {
        let req: UpdateOrderRequest = serde_json::from_str("{}").expect("deserialize");
        assert!(req.customer_id.is_none());
        assert!(req.items.is_none());
    }
}
