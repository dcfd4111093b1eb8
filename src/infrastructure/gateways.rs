use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::ports::{GatewayHandle, PaymentGateway};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum GatewayCode {
    PayPal,
    Przelewy24,
    Tpay,
    Volt,
}

impl GatewayCode {
    pub const ALL: [GatewayCode; 4] = [
        GatewayCode::PayPal,
        GatewayCode::Przelewy24,
        GatewayCode::Tpay,
        GatewayCode::Volt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayCode::PayPal => "paypal_payment_gateway",
            GatewayCode::Przelewy24 => "przelewy24_payment_gateway",
            GatewayCode::Tpay => "tpay_payment_gateway",
            GatewayCode::Volt => "volt_payment_gateway",
        }
    }
}

impl fmt::Display for GatewayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gateway that accepts every payment and only counts them.
///
/// Stands in for the PayPal, Przelewy24, Tpay and Volt adapters; none of them
/// executes a real payment.
#[derive(Debug)]
pub struct CountingGateway {
    code: GatewayCode,
    traffic_load: AtomicU64,
}

impl CountingGateway {
    pub fn new(code: GatewayCode) -> Self {
        Self {
            code,
            traffic_load: AtomicU64::new(0),
        }
    }

    /// Convenience constructor returning a shareable handle.
    pub fn handle(code: GatewayCode) -> Arc<Self> {
        Arc::new(Self::new(code))
    }

    pub fn code(&self) -> GatewayCode {
        self.code
    }
}

#[async_trait]
impl PaymentGateway for CountingGateway {
    async fn process(&self, mut payment: Payment) -> Result<()> {
        self.traffic_load.fetch_add(1, Ordering::Relaxed);
        payment.set_status(PaymentStatus::Completed);
        tracing::trace!(
            gateway = %self.code(),
            payment = ?payment.id,
            status = ?payment.status,
            "payment accepted"
        );
        Ok(())
    }

    fn traffic_load(&self) -> u64 {
        self.traffic_load.load(Ordering::Relaxed)
    }
}

/// Resolves gateway codes from configuration into live gateways.
#[derive(Default, Clone)]
pub struct GatewayRegistry {
    gateways: HashMap<String, GatewayHandle>,
}

impl GatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding one counting gateway per known `GatewayCode`.
    pub fn with_default_gateways() -> Self {
        let mut registry = Self::new();
        for code in GatewayCode::ALL {
            registry.register(code.as_str(), CountingGateway::handle(code));
        }
        registry
    }

    /// Registers `gateway` under `code`, replacing any previous entry.
    pub fn register(&mut self, code: impl Into<String>, gateway: GatewayHandle) {
        self.gateways.insert(code.into(), gateway);
    }

    pub fn resolve(&self, code: &str) -> Option<GatewayHandle> {
        self.gateways.get(code.trim()).cloned()
    }
}
