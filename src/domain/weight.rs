use crate::error::PaymentError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

/// Share of traffic a gateway receives, in percentage points.
///
/// Always a strictly positive integer. Raw weights are taken as `Decimal` so
/// that zero, negative and fractional inputs can be rejected instead of being
/// truncated away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u32);

impl Weight {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value <= Decimal::ZERO || !value.fract().is_zero() {
            return Err(PaymentError::InvalidWeight(value.normalize().to_string()));
        }
        value
            .to_u32()
            .map(Self)
            .ok_or_else(|| PaymentError::InvalidWeight(value.normalize().to_string()))
    }

    /// Accepts only a JSON integer literal. Floats (even `100.0`), strings,
    /// `null` and any other JSON type are rejected.
    pub fn from_json(value: &Value) -> Result<Self, PaymentError> {
        match value {
            Value::Number(number) => match number.as_i64() {
                Some(integer) => Self::new(Decimal::from(integer)),
                None => Err(PaymentError::InvalidWeight(number.to_string())),
            },
            other => Err(PaymentError::InvalidWeight(other.to_string())),
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}
