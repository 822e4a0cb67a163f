use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    order::{entities::Order, value_objects::PlaceOrderInput},
};

/// Append-only order log.
#[cfg_attr(test, mockall::automock)]
pub trait OrderLogRepository: Send + Sync {
    /// Append with all-or-nothing visibility; no partial writes.
    fn append(&self, order: Order) -> impl Future<Output = Result<Order, CoreError>> + Send;
}

/// Service trait for order placement.
pub trait OrderService: Send + Sync {
    fn place_order(
        &self,
        input: PlaceOrderInput,
    ) -> impl Future<Output = Result<Order, CoreError>> + Send;
}
