use verkle_numeric::U256;

use crate::fields::field::FieldElement;
use crate::fields::field_params::FieldParams;
use crate::groups::affine_point::AffinePoint;
use crate::groups::curve_params::CurveParams;

// ---------------------------------------------------------------------------
// Bandersnatch base field Fp (= the BLS12-381 scalar field)
// ---------------------------------------------------------------------------

pub struct BandersnatchFpParams;

impl FieldParams for BandersnatchFpParams {
    const MODULUS: U256 =
        U256::from_be_hex("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");
    const MODULUS_MINUS_ONE_DIV_TWO: U256 =
        U256::from_be_hex("39f6d3a994cebea4199cec0404d0ec02a9ded2017fff2dff7fffffff80000000");
}

pub type Fp = FieldElement<BandersnatchFpParams>;

// ---------------------------------------------------------------------------
// Bandersnatch scalar field Fr (prime subgroup order)
// ---------------------------------------------------------------------------

pub struct BandersnatchFrParams;

impl FieldParams for BandersnatchFrParams {
    const MODULUS: U256 =
        U256::from_be_hex("1cfb69d4ca675f520cce760202687600ff8f87007419047174fd06b52876e7e1");
    const MODULUS_MINUS_ONE_DIV_TWO: U256 =
        U256::from_be_hex("0e7db4ea6533afa906673b0101343b007fc7c3803a0c8238ba7e835a943b73f0");
}

pub type Fr = FieldElement<BandersnatchFrParams>;

// ---------------------------------------------------------------------------
// Bandersnatch curve parameters
// ---------------------------------------------------------------------------

/// Bandersnatch in twisted Edwards form: `a*x^2 + y^2 = 1 + d*x^2*y^2`
/// with `a = -5` and non-square `d`.
pub struct BandersnatchParams;

impl CurveParams for BandersnatchParams {
    type BaseFieldParams = BandersnatchFpParams;
    type ScalarFieldParams = BandersnatchFrParams;

    /// a = -5 mod p.
    const COEFF_A: U256 =
        U256::from_be_hex("73eda753299d7d483339d80809a1d80553bda402fffe5bfefffffffefffffffc");

    const COEFF_D: U256 =
        U256::from_be_hex("6389c12633c267cbc66e3bf86be3b6d8cb66677177e54f92b369f2f5188d58e7");

    const GENERATOR_X: U256 =
        U256::from_be_hex("29c132cc2c0b34c5743711777bbe42f32b79c022ad998465e1e71866a252ae18");

    const GENERATOR_Y: U256 =
        U256::from_be_hex("2a6c669eda123e0f157d8b50badcd586358cad81eee464605e3167b6cc974166");
}

pub type BandersnatchAffine = AffinePoint<BandersnatchParams>;
