// Field and curve arithmetic for the Verkle commitment scheme.
//
// - fields: generic fixed-modulus prime field element
// - groups: twisted Edwards group law in affine coordinates
// - curves: Bandersnatch parameter sets (base field, scalar field, curve)

pub mod curves;
pub mod fields;
pub mod groups;

#[cfg(test)]
mod tests;
