use actix_web::{web, HttpResponse};
use diesel::prelude::*;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::customer::{Customer, CustomerPatch, NewCustomer};
use crate::schema::{customers, orders};

use super::Pagination;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}

/// POST /customers
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Customer created", body = Customer),
        (status = 400, description = "Email already registered"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    pool: web::Data<DbPool>,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let customer = web::block(move || {
        let mut conn = pool.get()?;

        let taken = customers::table
            .filter(customers::email.eq(&body.email))
            .select(customers::id)
            .first::<i32>(&mut conn)
            .optional()?;
        if taken.is_some() {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let customer: Customer = diesel::insert_into(customers::table)
            .values(&NewCustomer {
                name: body.name,
                surname: body.surname,
                email: body.email,
            })
            .returning(Customer::as_returning())
            .get_result(&mut conn)?;
        Ok(customer)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(customer))
}

/// GET /customers
#[utoipa::path(
    get,
    path = "/customers",
    params(
        ("skip" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Maximum rows to return (default 100)"),
    ),
    responses(
        (status = 200, description = "List of customers", body = [Customer]),
    ),
    tag = "customers"
)]
pub async fn list_customers(
    pool: web::Data<DbPool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let rows = web::block(move || {
        let mut conn = pool.get()?;
        let rows: Vec<Customer> = customers::table
            .select(Customer::as_select())
            .order(customers::id.asc())
            .offset(query.skip.max(0))
            .limit(query.limit.max(0))
            .load(&mut conn)?;
        Ok::<_, AppError>(rows)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /customers/{id}
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Customer not found"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let customer = web::block(move || {
        let mut conn = pool.get()?;
        customers::table
            .find(id)
            .select(Customer::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(customer))
}

/// PUT /customers/{id}
///
/// Partial update: only the supplied fields are written. Changing the email
/// re-checks uniqueness against every other customer.
#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, description = "Email already registered"),
        (status = 404, description = "Customer not found"),
    ),
    tag = "customers"
)]
pub async fn update_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let body = body.into_inner();

    let customer = web::block(move || {
        let mut conn = pool.get()?;

        let existing: Customer = customers::table
            .find(id)
            .select(Customer::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        if let Some(email) = &body.email {
            if *email != existing.email {
                let taken = customers::table
                    .filter(customers::email.eq(email))
                    .select(customers::id)
                    .first::<i32>(&mut conn)
                    .optional()?;
                if taken.is_some() {
                    return Err(AppError::BadRequest("Email already registered".to_string()));
                }
            }
        }

        let patch = CustomerPatch {
            name: body.name,
            surname: body.surname,
            email: body.email,
        };
        if patch.is_empty() {
            return Ok(existing);
        }

        let updated: Customer = diesel::update(customers::table.find(id))
            .set(&patch)
            .returning(Customer::as_returning())
            .get_result(&mut conn)?;
        Ok(updated)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(customer))
}

/// DELETE /customers/{id}
///
/// Refused while the customer still has orders; orders hold a required
/// customer reference, so the orders must go first.
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 400, description = "Customer has existing orders"),
        (status = 404, description = "Customer not found"),
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || {
        let mut conn = pool.get()?;

        let found = customers::table
            .find(id)
            .select(customers::id)
            .first::<i32>(&mut conn)
            .optional()?;
        if found.is_none() {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        let open_orders: i64 = orders::table
            .filter(orders::customer_id.eq(id))
            .count()
            .get_result(&mut conn)?;
        if open_orders > 0 {
            return Err(AppError::BadRequest("Customer has existing orders".to_string()));
        }

        diesel::delete(customers::table.find(id)).execute(&mut conn)?;
        Ok(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({ "message": "Customer deleted successfully" })))
}
