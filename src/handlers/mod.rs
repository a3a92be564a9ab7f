pub mod categories;
pub mod customers;
pub mod items;
pub mod orders;

use actix_web::HttpResponse;
use serde::Deserialize;
use utoipa::ToSchema;

/// Offset/limit pagination shared by every list endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Welcome to Online Shop API" }))
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn pagination_defaults_to_skip_0_limit_100() {
        let p: Pagination = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 100);
    }
}
