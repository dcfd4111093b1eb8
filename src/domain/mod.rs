//! Domain types: the payment record, gateway weights and the ports the
//! traffic splitter depends on.

pub mod payment;
pub mod ports;
pub mod weight;
