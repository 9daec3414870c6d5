pub mod conversions;
pub mod serialization;
pub mod significant;

pub use conversions::U256Ext;
