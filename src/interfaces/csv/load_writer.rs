use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Per-gateway outcome of a routing run.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct GatewayLoad {
    pub gateway: String,
    pub weight: u32,
    pub traffic_load: u64,
}

/// Writes gateway loads as CSV with a `gateway,weight,traffic_load` header.
pub struct LoadWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> LoadWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_loads(&mut self, loads: impl IntoIterator<Item = GatewayLoad>) -> Result<()> {
        for load in loads {
            self.writer.serialize(load)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
