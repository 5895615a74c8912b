// Numeric scaffolding shared by the arithmetic crates.
//
// - uint256: `crypto_bigint::U256` plus the extension methods the field
//   code needs beyond the upstream API

pub mod uint256;

pub use uint256::{U256, U256Ext, U512};
