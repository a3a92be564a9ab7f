use super::errors::DomainError;
use super::order::{OrderItemInput, OrderPatch, OrderView};

pub trait OrderRepository: Send + Sync + 'static {
    fn create(
        &self,
        customer_id: i32,
        items: Vec<OrderItemInput>,
    ) -> Result<OrderView, DomainError>;
    fn update(&self, id: i32, patch: OrderPatch) -> Result<OrderView, DomainError>;
    fn delete(&self, id: i32) -> Result<OrderView, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<OrderView>, DomainError>;
    fn list(&self, skip: i64, limit: i64) -> Result<Vec<OrderView>, DomainError>;
}
