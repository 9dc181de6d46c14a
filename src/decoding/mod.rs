pub mod cleaners;
pub mod decoder;
pub mod extract;
pub mod normalize;

pub use decoder::MrzDecoder;
pub use extract::RawFields;

/// TD3 (passport) MRZ geometry.
pub const MRZ_LINE_COUNT: usize = 2;
pub const MRZ_LINE_LENGTH: usize = 44;
pub const FILLER: char = '<';
