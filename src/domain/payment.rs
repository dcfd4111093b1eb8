use crate::error::PaymentError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a positive monetary amount for a payment.
///
/// Mirrors the 2-decimal precision of the payment record; values are rounded
/// on construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value > Decimal::ZERO {
            Ok(Self(value.round_dp(2)))
        } else {
            Err(PaymentError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Created,
    Completed,
}

/// A payment handed to the traffic splitter.
///
/// The splitter never looks inside; it only forwards the record to the
/// selected gateway.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub id: Option<u64>,
    pub amount: Amount,
    pub currency: String,
    pub status: PaymentStatus,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn new(
        amount: Amount,
        currency: &str,
        payment_method: &str,
    ) -> Result<Self, PaymentError> {
        let currency = currency.trim().to_ascii_uppercase();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PaymentError::ValidationError(format!(
                "Currency must be a 3-letter code (got '{currency}')"
            )));
        }

        Ok(Self {
            id: None,
            amount,
            currency,
            status: PaymentStatus::Created,
            payment_method: payment_method.trim().to_string(),
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Moves the payment to `status` and stamps `updated_at`.
    pub fn set_status(&mut self, status: PaymentStatus) {
        self.status = status;
        self.updated_at = Some(Utc::now());
    }
}
