use crate::domain::errors::DomainError;
use crate::domain::order::{OrderItemInput, OrderPatch, OrderView};
use crate::domain::ports::OrderRepository;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_order(
        &self,
        customer_id: i32,
        items: Vec<OrderItemInput>,
    ) -> Result<OrderView, DomainError> {
        self.repo.create(customer_id, items)
    }

    pub fn update_order(&self, id: i32, patch: OrderPatch) -> Result<OrderView, DomainError> {
        self.repo.update(id, patch)
    }

    pub fn delete_order(&self, id: i32) -> Result<OrderView, DomainError> {
        self.repo.delete(id)
    }

    pub fn get_order(&self, id: i32) -> Result<Option<OrderView>, DomainError> {
        self.repo.find_by_id(id)
    }

    pub fn list_orders(&self, skip: i64, limit: i64) -> Result<Vec<OrderView>, DomainError> {
        self.repo.list(skip, limit)
    }
}
