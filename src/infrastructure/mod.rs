pub mod gateways;
pub mod random;
