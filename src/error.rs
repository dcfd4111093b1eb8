use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("A valid gateway must implement PaymentGateway: {0}")]
    InvalidGateway(String),
    #[error("Weight must be a positive integer (you provided {0})")]
    InvalidWeight(String),
    #[error("Sum of weights must be exactly 100 (you provided {0})")]
    InvalidWeightSum(u64),
    #[error("No payment gateway was selected for routing")]
    NoGatewayRouted,
    #[error("Gateway error: {0}")]
    GatewayError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
