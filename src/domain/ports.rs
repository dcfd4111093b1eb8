use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Capability every gateway handed to the traffic splitter must provide.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Accepts a payment. Failures are returned to the caller of the router
    /// untouched.
    async fn process(&self, payment: Payment) -> Result<()>;

    /// Number of times `process` has been called on this instance.
    fn traffic_load(&self) -> u64;
}

pub type GatewayHandle = Arc<dyn PaymentGateway>;

/// Source of the uniform draw used to pick a gateway.
pub trait RandomSource: Send + Sync {
    /// Returns an integer in the inclusive range `[1, upper]`.
    fn draw(&self, upper: u32) -> u32;
}

pub type RandomSourceBox = Box<dyn RandomSource>;
