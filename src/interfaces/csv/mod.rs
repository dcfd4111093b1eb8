pub mod load_writer;
pub mod payment_reader;
