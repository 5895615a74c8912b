use verkle_numeric::U256;

use crate::fields::field::FieldElement;
use crate::fields::field_params::FieldParams;

/// Trait defining a twisted Edwards curve's parameters.
///
/// The curve is `a*x^2 + y^2 = 1 + d*x^2*y^2` over the base field, with
/// the scalar field giving the order of the prime subgroup.
///
/// Constants are stored as reduced integer values; use the provided
/// constructors to obtain them as field elements.
pub trait CurveParams: 'static + Send + Sync + Sized {
    type BaseFieldParams: FieldParams;
    type ScalarFieldParams: FieldParams;

    /// Curve coefficient `a`, reduced mod the base field modulus.
    const COEFF_A: U256;

    /// Curve coefficient `d`. Must be a non-square in the base field for
    /// the unified addition formulas to be complete.
    const COEFF_D: U256;

    /// Generator point x-coordinate.
    const GENERATOR_X: U256;

    /// Generator point y-coordinate.
    const GENERATOR_Y: U256;

    /// Construct curve coefficient a as a field element.
    fn coeff_a() -> FieldElement<Self::BaseFieldParams> {
        FieldElement::from_raw(Self::COEFF_A)
    }

    /// Construct curve coefficient d as a field element.
    fn coeff_d() -> FieldElement<Self::BaseFieldParams> {
        FieldElement::from_raw(Self::COEFF_D)
    }

    /// Construct the generator point's x-coordinate as a field element.
    fn generator_x() -> FieldElement<Self::BaseFieldParams> {
        FieldElement::from_raw(Self::GENERATOR_X)
    }

    /// Construct the generator point's y-coordinate as a field element.
    fn generator_y() -> FieldElement<Self::BaseFieldParams> {
        FieldElement::from_raw(Self::GENERATOR_Y)
    }
}

// Convenience type aliases
pub type BaseField<C> = FieldElement<<C as CurveParams>::BaseFieldParams>;
pub type ScalarField<C> = FieldElement<<C as CurveParams>::ScalarFieldParams>;
