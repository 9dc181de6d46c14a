pub mod decoding;
pub mod models;
pub mod processing;
pub mod utils;
pub mod passport_reader;

pub use decoding::MrzDecoder;
pub use passport_reader::PassportReader;
