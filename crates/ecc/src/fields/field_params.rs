use verkle_numeric::U256;

/// Trait defining the parameters for a prime field.
///
/// The modulus is a compile-time constant of a zero-sized implementer; a
/// `FieldElement` bound to one implementer can never carry a different
/// modulus at run time.
pub trait FieldParams: 'static + Send + Sync + Sized {
    /// The prime modulus p.
    const MODULUS: U256;

    /// (p - 1) / 2, the threshold for the lexicographic sign convention.
    const MODULUS_MINUS_ONE_DIV_TWO: U256;
}
