//! Application layer containing the traffic splitting logic.
//!
//! This module defines `TrafficSplit`, which validates a weighted gateway table
//! once and then routes each payment to a single gateway by weighted random draw.

pub mod traffic_split;
