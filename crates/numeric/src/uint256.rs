// 256-bit unsigned integer support.
//
// The arithmetic crates store field values as `crypto_bigint::U256` and
// need a handful of accessors the upstream type spells differently (or
// not at all). Rather than scatter those call sites, the gaps are closed
// here with an extension trait.

use crypto_bigint::Uint;

/// 256-bit unsigned integer, backed by `crypto_bigint::U256`.
pub type U256 = Uint<4>;

/// 512-bit unsigned integer, used for wide reduction of products.
pub type U512 = Uint<8>;

/// Convenience methods layered on [`U256`].
pub trait U256Ext {
    /// Position of the most significant set bit (0-indexed).
    /// Returns 0 for a zero input.
    fn get_msb(&self) -> u32;

    /// Extract the bit at `index`.
    fn get_bit(&self, index: u32) -> bool;

    /// Construct from 4 u64 limbs, least significant first.
    fn from_limbs(limbs: [u64; 4]) -> Self;

    /// The raw u64 limbs, least significant first.
    fn limbs(&self) -> [u64; 4];
}

impl U256Ext for U256 {
    fn get_msb(&self) -> u32 {
        let bits = self.bits_vartime();
        if bits == 0 { 0 } else { bits - 1 }
    }

    fn get_bit(&self, index: u32) -> bool {
        self.bit_vartime(index)
    }

    fn from_limbs(limbs: [u64; 4]) -> Self {
        U256::from_words(limbs)
    }

    fn limbs(&self) -> [u64; 4] {
        *self.as_words()
    }
}
