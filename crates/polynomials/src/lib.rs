// Dual polynomial representations over the Verkle scalar field.
//
// - monomial_basis: explicit coefficient vectors (Horner evaluation,
//   vanishing polynomials, exact division)
// - lagrange_basis: evaluations over a fixed domain (pointwise ops,
//   barycentric out-of-domain evaluation, interpolation)

pub mod error;
pub mod lagrange_basis;
pub mod monomial_basis;

pub use error::Error;
pub use lagrange_basis::LagrangeBasis;
pub use monomial_basis::MonomialBasis;
