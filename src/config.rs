use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

/// One `gateway = weight` pair as written in configuration.
///
/// Both fields are kept as raw JSON and default to `null` when missing, so a
/// wrong type surfaces as `InvalidGateway` / `InvalidWeight` when the traffic
/// split is built rather than as a parse error here.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct GatewayWeightConfig {
    #[serde(default)]
    pub gateway: Value,
    #[serde(default)]
    pub weight: Value,
}

impl GatewayWeightConfig {
    pub fn new(gateway: &str, weight: impl Into<Value>) -> Self {
        Self {
            gateway: Value::String(gateway.to_string()),
            weight: weight.into(),
        }
    }

    /// The gateway code, if the entry names one.
    pub fn gateway_code(&self) -> Option<&str> {
        self.gateway.as_str().map(str::trim)
    }
}

impl FromStr for GatewayWeightConfig {
    type Err = PaymentError;

    /// Parses `code=weight`, as accepted by `--split`. The weight is read as a
    /// JSON literal, so `50.5` or `"50"` parse here and fail validation later.
    fn from_str(s: &str) -> Result<Self> {
        let (gateway, weight) = s.split_once('=').ok_or_else(|| {
            PaymentError::ConfigError(format!("expected <gateway>=<weight>, got '{s}'"))
        })?;
        let weight: Value = serde_json::from_str(weight.trim()).map_err(|e| {
            PaymentError::ConfigError(format!("invalid weight '{}': {e}", weight.trim()))
        })?;
        Ok(Self::new(gateway.trim(), weight))
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct SplitConfig {
    #[serde(default)]
    pub gateways: Vec<GatewayWeightConfig>,
}

impl SplitConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PaymentError::ConfigError(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Appends `entries` after the ones already configured.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = GatewayWeightConfig>) {
        self.gateways.extend(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_split_arg() {
        let entry: GatewayWeightConfig = "volt_payment_gateway = 25".parse().unwrap();
        assert_eq!(entry.gateway_code(), Some("volt_payment_gateway"));
        assert_eq!(entry.weight, json!(25));
    }

    #[test]
    fn test_parse_split_arg_keeps_bad_weights_for_validation() {
        let entry: GatewayWeightConfig = "tpay_payment_gateway=-2.5".parse().unwrap();
        assert_eq!(entry.weight, json!(-2.5));
    }

    #[test]
    fn test_parse_split_arg_malformed() {
        assert!(matches!(
            "tpay_payment_gateway".parse::<GatewayWeightConfig>(),
            Err(PaymentError::ConfigError(_))
        ));
        assert!(matches!(
            "tpay_payment_gateway=abc".parse::<GatewayWeightConfig>(),
            Err(PaymentError::ConfigError(_))
        ));
    }

    #[test]
    fn test_json_config() {
        let json = r#"{"gateways": [
            {"gateway": "paypal_payment_gateway", "weight": 60},
            {"gateway": "volt_payment_gateway", "weight": 40}
        ]}"#;
        let config = SplitConfig::from_json_str(json).unwrap();
        assert_eq!(config.gateways.len(), 2);
        assert_eq!(config.gateways[0].gateway_code(), Some("paypal_payment_gateway"));
        assert_eq!(config.gateways[1].weight, json!(40));
    }

    #[test]
    fn test_json_config_missing_fields_default_to_null() {
        let config =
            SplitConfig::from_json_str(r#"{"gateways": [{"gateway": 7}, {}]}"#).unwrap();
        assert_eq!(config.gateways[0].gateway_code(), None);
        assert_eq!(config.gateways[0].weight, Value::Null);
        assert_eq!(config.gateways[1].gateway, Value::Null);
    }

    #[test]
    fn test_json_config_missing_gateways_is_empty() {
        let config = SplitConfig::from_json_str("{}").unwrap();
        assert!(config.gateways.is_empty());
    }

    #[test]
    fn test_invalid_json_config() {
        assert!(matches!(
            SplitConfig::from_json_str("{\"gateways\": 3}"),
            Err(PaymentError::ConfigError(_))
        ));
    }
}
