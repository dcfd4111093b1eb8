use crate::config::SplitConfig;
use crate::domain::payment::Payment;
use crate::domain::ports::{GatewayHandle, RandomSourceBox};
use crate::domain::weight::Weight;
use crate::error::{PaymentError, Result};
use crate::infrastructure::gateways::GatewayRegistry;
use crate::infrastructure::random::ThreadRandom;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Weights of a routing table must add up to exactly this many points.
pub const VALID_PERCENTAGE: u64 = 100;

/// A gateway paired with its unvalidated weight.
#[derive(Clone)]
pub struct WeightedGateway {
    pub gateway: GatewayHandle,
    pub weight: Decimal,
}

impl WeightedGateway {
    pub fn new(gateway: GatewayHandle, weight: impl Into<Decimal>) -> Self {
        Self {
            gateway,
            weight: weight.into(),
        }
    }
}

/// Validated gateways in construction order, with their precomputed total.
struct RoutingTable {
    entries: Vec<(GatewayHandle, Weight)>,
    total_weight: u32,
}

impl RoutingTable {
    /// Collects entries already checked one by one (gateway first, then
    /// weight) and finally checks the sum.
    ///
    /// Entries are consumed lazily so the first bad one aborts the build.
    fn build<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<(GatewayHandle, Weight)>>,
    {
        let mut validated = Vec::new();
        let mut sum: u64 = 0;
        for entry in entries {
            let (gateway, weight) = entry?;
            sum += u64::from(weight.value());
            validated.push((gateway, weight));
        }

        if sum != VALID_PERCENTAGE {
            return Err(PaymentError::InvalidWeightSum(sum));
        }

        Ok(Self {
            entries: validated,
            total_weight: VALID_PERCENTAGE as u32,
        })
    }

    /// Cumulative-weight walk: the first entry whose running sum reaches
    /// `draw` wins, so an earlier entry owns the lower edge of its band.
    fn select(&self, draw: u32) -> Result<&GatewayHandle> {
        let mut cumulative: u32 = 0;
        for (gateway, weight) in &self.entries {
            cumulative += weight.value();
            if draw <= cumulative {
                return Ok(gateway);
            }
        }
        Err(PaymentError::NoGatewayRouted)
    }
}

/// Routes every payment to exactly one gateway, chosen at random in
/// proportion to the configured weights.
pub struct TrafficSplit {
    table: RoutingTable,
    random: RandomSourceBox,
}

impl TrafficSplit {
    /// Builds a split drawing from the thread-local generator.
    ///
    /// # Errors
    ///
    /// * `InvalidWeight` - a weight is not a positive integer.
    /// * `InvalidWeightSum` - the weights do not add up to 100 (an empty list
    ///   adds up to 0).
    pub fn new(entries: Vec<WeightedGateway>) -> Result<Self> {
        Self::with_random_source(entries, Box::new(ThreadRandom))
    }

    pub fn with_random_source(
        entries: Vec<WeightedGateway>,
        random: RandomSourceBox,
    ) -> Result<Self> {
        let table = RoutingTable::build(
            entries
                .into_iter()
                .map(|e| Weight::new(e.weight).map(|weight| (e.gateway, weight))),
        )?;
        Ok(Self::ready(table, random))
    }

    /// Builds a split from configuration, looking every gateway code up in
    /// `registry`. A missing, non-string or unknown gateway fails with
    /// `InvalidGateway` before that entry's weight is checked; the weight must
    /// be a JSON integer.
    pub fn from_config(config: &SplitConfig, registry: &GatewayRegistry) -> Result<Self> {
        Self::from_config_with_random_source(config, registry, Box::new(ThreadRandom))
    }

    pub fn from_config_with_random_source(
        config: &SplitConfig,
        registry: &GatewayRegistry,
        random: RandomSourceBox,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        let entries = config
            .gateways
            .iter()
            .map(|entry| -> Result<(GatewayHandle, Weight)> {
                let code = entry
                    .gateway_code()
                    .ok_or_else(|| PaymentError::InvalidGateway(entry.gateway.to_string()))?;
                let gateway = registry
                    .resolve(code)
                    .ok_or_else(|| PaymentError::InvalidGateway(code.to_string()))?;
                if !seen.insert(code) {
                    tracing::warn!(
                        gateway = code,
                        "repeated gateway code, its entries share one traffic counter"
                    );
                }
                Ok((gateway, Weight::from_json(&entry.weight)?))
            });
        let table = RoutingTable::build(entries)?;
        Ok(Self::ready(table, random))
    }

    fn ready(table: RoutingTable, random: RandomSourceBox) -> Self {
        tracing::info!(
            gateways = table.entries.len(),
            total_weight = table.total_weight,
            "traffic split configured"
        );
        for (position, (_, weight)) in table.entries.iter().enumerate() {
            tracing::debug!(position, weight = weight.value(), "routing band");
        }
        Self { table, random }
    }

    /// Hands `payment` to one gateway picked by weighted random draw.
    ///
    /// Whatever the chosen gateway returns is returned as is.
    pub async fn route(&self, payment: Payment) -> Result<()> {
        let draw = self.random.draw(self.table.total_weight);
        let gateway = self.table.select(draw)?;
        gateway.process(payment).await
    }

    pub fn total_weight(&self) -> u32 {
        self.table.total_weight
    }

    /// Gateways and weights in routing order.
    pub fn entries(&self) -> impl Iterator<Item = (&GatewayHandle, Weight)> {
        self.table.entries.iter().map(|(gateway, weight)| (gateway, *weight))
    }

    /// Current traffic load of every gateway, in routing order.
    pub fn traffic_loads(&self) -> Vec<u64> {
        self.entries()
            .map(|(gateway, _)| gateway.traffic_load())
            .collect()
    }
}
