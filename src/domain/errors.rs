use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Order not found")]
    OrderNotFound,
    #[error("Customer not found")]
    CustomerNotFound,
    #[error("Shop item with id {0} not found")]
    ShopItemNotFound(i32),
    #[error("Internal error: {0}")]
    Internal(String),
}
