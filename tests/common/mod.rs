#![allow(dead_code)]

use std::io::Error;
use std::path::Path;
use std::sync::Arc;
use trafficsplit::application::traffic_split::{TrafficSplit, WeightedGateway};
use trafficsplit::domain::payment::Payment;
use trafficsplit::infrastructure::gateways::{CountingGateway, GatewayCode};

pub fn make_payment(id: u64) -> Payment {
    let amount = rust_decimal::Decimal::from(id % 1000 + 1);
    Payment::new(amount.try_into().unwrap(), "PLN", "card")
        .unwrap()
        .with_id(id)
}

/// Builds a split over fresh counting gateways, cycling through the known
/// gateway kinds. Returns the gateways so tests can read their loads.
pub fn counting_split(weights: &[i64]) -> (Vec<Arc<CountingGateway>>, TrafficSplit) {
    let gateways: Vec<Arc<CountingGateway>> = weights
        .iter()
        .enumerate()
        .map(|(i, _)| CountingGateway::handle(GatewayCode::ALL[i % GatewayCode::ALL.len()]))
        .collect();
    let entries = gateways
        .iter()
        .zip(weights)
        .map(|(gateway, weight)| WeightedGateway::new(gateway.clone(), *weight))
        .collect();
    let split = TrafficSplit::new(entries).expect("valid weights");
    (gateways, split)
}

pub async fn route_many(split: &TrafficSplit, count: u64) {
    for i in 0..count {
        split.route(make_payment(i)).await.unwrap();
    }
}

pub fn loads(gateways: &[Arc<CountingGateway>]) -> Vec<u64> {
    use trafficsplit::domain::ports::PaymentGateway;
    gateways.iter().map(|g| g.traffic_load()).collect()
}

pub fn generate_payments_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;

    wtr.write_record(["id", "amount", "currency", "payment_method"])?;

    for i in 1..=rows {
        wtr.write_record([i.to_string().as_str(), "10.00", "PLN", "card"])?;
    }

    wtr.flush()?;
    Ok(())
}
