use crate::domain::payment::Payment;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct PaymentRow {
    id: Option<u64>,
    amount: Decimal,
    currency: String,
    payment_method: String,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = PaymentError;

    fn try_from(row: PaymentRow) -> Result<Self> {
        let payment = Payment::new(row.amount.try_into()?, &row.currency, &row.payment_method)?;
        Ok(match row.id {
            Some(id) => payment.with_id(id),
            None => payment,
        })
    }
}

/// Reads payments from a CSV source.
///
/// Expects the columns `id, amount, currency, payment_method`. Each row is
/// validated into a `Payment`; a bad row yields an error without stopping the
/// stream.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates payments.
    pub fn payments(self) -> impl Iterator<Item = Result<Payment>> {
        self.reader.into_deserialize().map(|result| -> Result<Payment> {
            let row: PaymentRow = result?;
            Payment::try_from(row)
        })
    }
}
