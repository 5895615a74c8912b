use verkle_numeric::{U256, U256Ext};

use crate::curves::bandersnatch::{
    BandersnatchAffine, BandersnatchFpParams, BandersnatchFrParams, BandersnatchParams, Fp, Fr,
};
use crate::fields::field::FieldElement;
use crate::fields::field_params::FieldParams;
use crate::groups::curve_params::CurveParams;

// Small-modulus field for fast deterministic edge-case vectors.
struct F13Params;

impl FieldParams for F13Params {
    const MODULUS: U256 = U256::from_u64(13);
    const MODULUS_MINUS_ONE_DIV_TWO: U256 = U256::from_u64(6);
}

type F13 = FieldElement<F13Params>;

// Mod 17, 2 is a quadratic residue, so the square-root routine has to
// search past it for a non-residue.
struct F17Params;

impl FieldParams for F17Params {
    const MODULUS: U256 = U256::from_u64(17);
    const MODULUS_MINUS_ONE_DIV_TWO: U256 = U256::from_u64(8);
}

type F17 = FieldElement<F17Params>;

// =========================================================================
// Field parameter sanity
// =========================================================================

#[test]
fn bandersnatch_fp_modulus_matches_known_value() {
    let m = BandersnatchFpParams::MODULUS.limbs();
    assert_eq!(m[0], 0xffffffff00000001);
    assert_eq!(m[1], 0x53bda402fffe5bfe);
    assert_eq!(m[2], 0x3339d80809a1d805);
    assert_eq!(m[3], 0x73eda753299d7d48);
}

#[test]
fn bandersnatch_fr_modulus_matches_known_value() {
    let m = BandersnatchFrParams::MODULUS.limbs();
    assert_eq!(m[0], 0x74fd06b52876e7e1);
    assert_eq!(m[1], 0xff8f870074190471);
    assert_eq!(m[2], 0x0cce760202687600);
    assert_eq!(m[3], 0x1cfb69d4ca675f52);
}

#[test]
fn half_modulus_constants_are_half_the_modulus() {
    let double = BandersnatchFpParams::MODULUS_MINUS_ONE_DIV_TWO
        .wrapping_shl_vartime(1)
        .wrapping_add(&U256::ONE);
    assert_eq!(double, BandersnatchFpParams::MODULUS);
    let double = BandersnatchFrParams::MODULUS_MINUS_ONE_DIV_TWO
        .wrapping_shl_vartime(1)
        .wrapping_add(&U256::ONE);
    assert_eq!(double, BandersnatchFrParams::MODULUS);
}

// =========================================================================
// Field arithmetic
// =========================================================================

#[test]
fn field_additive_identities() {
    for _ in 0..8 {
        let a = Fr::random_element();
        assert_eq!(a + Fr::zero(), a);
        assert_eq!(a + (-a), Fr::zero());
        assert_eq!(a - a, Fr::zero());
    }
}

#[test]
fn field_multiplicative_identities() {
    for _ in 0..8 {
        let a = Fp::random_element();
        assert_eq!(a * Fp::one(), a);
        if !a.is_zero() {
            let inv = a.invert().unwrap();
            assert_eq!(a * inv, Fp::one());
        }
    }
}

#[test]
fn field_mul_matches_repeated_add() {
    let a = Fr::random_element();
    assert_eq!(a * Fr::from_u64(3), a + a + a);
}

#[test]
fn invert_zero_is_none() {
    assert!(Fr::zero().invert().is_none());
    assert!(F13::zero().invert().is_none());
}

#[test]
fn div_by_zero_is_none() {
    let a = Fr::random_element();
    assert!(a.div(&Fr::zero()).is_none());
}

#[test]
fn div_round_trips_through_mul() {
    let a = Fr::random_element();
    let b = Fr::random_element();
    if b.is_zero() {
        return;
    }
    let q = a.div(&b).unwrap();
    assert_eq!(q * b, a);
}

#[test]
fn pow_edge_cases() {
    let a = Fr::random_element();
    assert_eq!(a.pow(&U256::ZERO), Fr::one());
    assert_eq!(a.pow(&U256::ONE), a);
    assert_eq!(a.pow(&U256::from_u64(2)), a.square());
    assert_eq!(Fr::zero().pow(&U256::ZERO), Fr::one());
    assert_eq!(Fr::zero().pow(&U256::from_u64(5)), Fr::zero());
}

#[test]
fn from_i64_maps_negatives_through_zero() {
    assert_eq!(Fp::from_i64(-5), -Fp::from_u64(5));
    assert_eq!(Fp::from_i64(7), Fp::from_u64(7));
    assert_eq!(Fp::from_i64(-5), BandersnatchParams::coeff_a());
}

#[test]
fn ordering_follows_integer_value() {
    let a = F13::from_u64(3);
    let b = F13::from_u64(9);
    assert!(a < b);
    assert!(b > a);
    assert!(a <= a);
}

#[test]
fn construction_reduces_into_range() {
    assert_eq!(F13::from_u64(20).value(), U256::from_u64(7));
    assert_eq!(F13::from_u64(13), F13::zero());
}

// =========================================================================
// Mod-13 known-answer vectors
// =========================================================================

#[test]
fn mod13_addition() {
    assert_eq!(F13::from_u64(7) + F13::from_u64(9), F13::from_u64(3));
}

#[test]
fn mod13_inverse_of_five_is_eight() {
    // 5 * 8 = 40 = 3*13 + 1
    assert_eq!(F13::from_u64(5).invert(), Some(F13::from_u64(8)));
}

#[test]
fn mod13_sqrt_of_four() {
    let root = F13::from_u64(4).sqrt().unwrap();
    assert_eq!(root * root, F13::from_u64(4));
    assert!(root == F13::from_u64(2) || root == F13::from_u64(11));
    // the two roots sit on opposite sides of (p-1)/2
    assert_ne!(
        root.lexicographically_largest(),
        (-root).lexicographically_largest()
    );
}

#[test]
fn mod13_two_is_a_non_residue() {
    assert!(F13::from_u64(2).sqrt().is_none());
}

#[test]
fn mod17_sqrt_searches_past_a_residue_two() {
    // 2^8 = 1 mod 17, so the non-residue search must advance beyond 2
    let root = F17::from_u64(2).sqrt().unwrap();
    assert_eq!(root * root, F17::from_u64(2));
    assert!(root == F17::from_u64(6) || root == F17::from_u64(11));
}

#[test]
fn sqrt_of_zero_is_zero() {
    assert_eq!(F13::zero().sqrt(), Some(F13::zero()));
}

#[test]
fn mod13_lexicographic_threshold() {
    assert!(!F13::from_u64(6).lexicographically_largest());
    assert!(F13::from_u64(7).lexicographically_largest());
    assert!(!F13::zero().lexicographically_largest());
}

#[test]
fn sqrt_of_square_is_plus_or_minus_root() {
    for _ in 0..4 {
        let a = Fp::random_element();
        let root = a.square().sqrt().unwrap();
        assert!(root == a || root == -a);
    }
}

// =========================================================================
// Batch inversion
// =========================================================================

#[test]
fn batch_invert_matches_individual_inverts() {
    let values: Vec<Fr> = (0..16).map(|_| Fr::random_element()).collect();
    let inverses = Fr::batch_invert(&values);
    for (value, inverse) in values.iter().zip(&inverses) {
        assert_eq!(value.invert(), Some(*inverse));
    }
}

#[test]
fn batch_invert_with_interleaved_zeros() {
    let values = vec![
        F13::from_u64(2),
        F13::zero(),
        F13::from_u64(3),
        F13::zero(),
        F13::from_u64(5),
    ];
    let inverses = F13::batch_invert(&values);
    assert_eq!(inverses[0], F13::from_u64(7));
    assert_eq!(inverses[1], F13::zero());
    assert_eq!(inverses[2], F13::from_u64(9));
    assert_eq!(inverses[3], F13::zero());
    assert_eq!(inverses[4], F13::from_u64(8));
}

#[test]
fn batch_invert_zero_after_non_zero_entries() {
    // regression shape: a zero that follows non-zero entries must not
    // disturb the earlier outputs
    let values = vec![F13::from_u64(2), F13::zero(), F13::from_u64(3)];
    let inverses = F13::batch_invert(&values);
    assert_eq!(inverses, vec![F13::from_u64(7), F13::zero(), F13::from_u64(9)]);
}

#[test]
fn batch_invert_all_zeros() {
    let values = vec![Fr::zero(); 4];
    assert_eq!(Fr::batch_invert(&values), values);
}

#[test]
fn batch_invert_empty() {
    assert!(Fr::batch_invert(&[]).is_empty());
}

// =========================================================================
// Byte encoding
// =========================================================================

#[test]
fn strict_decode_rejects_the_modulus() {
    use crypto_bigint::Encoding;
    let bytes = BandersnatchFpParams::MODULUS.to_be_bytes();
    assert!(Fp::from_be_bytes(&bytes).is_none());
    assert_eq!(Fp::from_be_bytes_reduced(&bytes), Fp::zero());
}

#[test]
fn strict_decode_accepts_modulus_minus_one() {
    use crypto_bigint::Encoding;
    let bytes = BandersnatchFpParams::MODULUS
        .wrapping_sub(&U256::ONE)
        .to_be_bytes();
    let decoded = Fp::from_be_bytes(&bytes).unwrap();
    assert_eq!(decoded, -Fp::one());
}

#[test]
fn field_byte_round_trip() {
    for _ in 0..4 {
        let a = Fr::random_element();
        assert_eq!(Fr::from_be_bytes(&a.to_be_bytes()), Some(a));
    }
}

// =========================================================================
// Curve group
// =========================================================================

#[test]
fn generator_is_on_curve() {
    assert!(BandersnatchAffine::generator().is_on_curve());
}

#[test]
fn identity_is_on_curve_and_neutral() {
    let id = BandersnatchAffine::identity();
    assert!(id.is_on_curve());
    let g = BandersnatchAffine::generator();
    assert_eq!(g + id, g);
    assert_eq!(id + g, g);
}

#[test]
fn negation_stays_on_curve_and_cancels() {
    let g = BandersnatchAffine::generator();
    let neg_g = -g;
    assert!(neg_g.is_on_curve());
    assert_eq!(g + neg_g, BandersnatchAffine::identity());
    assert_eq!(g - g, BandersnatchAffine::identity());
}

#[test]
fn double_matches_add() {
    let g = BandersnatchAffine::generator();
    assert_eq!(g.double(), g + g);
    let p = g.double().double();
    assert_eq!(p.double(), p + p);
}

#[test]
fn double_generator_known_answer() {
    let expected = BandersnatchAffine::new(
        Fp::from_raw(U256::from_be_hex(
            "30433263b93777d7d9afef0ad0c2917e183ef5a9de026eeda53626c7c6631b2c",
        )),
        Fp::from_raw(U256::from_be_hex(
            "2a2c8f6465887ceee9ee3185f32b42829e0dfa7f6c65f0071039026018903b8b",
        )),
    );
    assert_eq!(BandersnatchAffine::generator().double(), expected);
}

#[test]
fn triple_generator_known_answer() {
    let g = BandersnatchAffine::generator();
    let expected = BandersnatchAffine::new(
        Fp::from_raw(U256::from_be_hex(
            "2a7a99b0870a6244304b9231050859771fe941cad1bcaede655d2278621a3466",
        )),
        Fp::from_raw(U256::from_be_hex(
            "2663e58bc157a7cf84d49524700a147bb53489232ea5962c3765bbfe95004080",
        )),
    );
    assert_eq!(g.double() + g, expected);
}

#[test]
fn addition_is_commutative_and_associative() {
    let g = BandersnatchAffine::generator();
    let p = g.double();
    let q = p.double();
    assert_eq!(g + p, p + g);
    assert_eq!((g + p) + q, g + (p + q));
}

#[test]
fn scalar_mul_small_scalars_match_repeated_add() {
    let g = BandersnatchAffine::generator();
    assert_eq!(g.scalar_mul(&Fr::zero()), BandersnatchAffine::identity());
    assert_eq!(g.scalar_mul(&Fr::one()), g);
    assert_eq!(g.scalar_mul(&Fr::from_u64(2)), g + g);
    assert_eq!(g.scalar_mul(&Fr::from_u64(3)), (g + g) + g);
}

#[test]
fn scalar_mul_by_minus_one_negates() {
    let g = BandersnatchAffine::generator();
    assert_eq!(g.scalar_mul(&(-Fr::one())), -g);
}

#[test]
fn scalar_mul_distributes_over_scalar_addition() {
    let g = BandersnatchAffine::generator();
    let a = Fr::random_element();
    let b = Fr::random_element();
    assert_eq!(g.scalar_mul(&(a + b)), g.scalar_mul(&a) + g.scalar_mul(&b));
}

#[test]
fn scalar_mul_operators_both_ways() {
    let g = BandersnatchAffine::generator();
    let k = Fr::from_u64(5);
    assert_eq!(g * k, k * g);
    assert_eq!(g * k, g.scalar_mul(&k));
}

#[test]
fn scalar_mul_result_stays_on_curve() {
    let g = BandersnatchAffine::generator();
    let p = g.scalar_mul(&Fr::random_element());
    assert!(p.is_on_curve());
}

// =========================================================================
// y-recovery and compressed encoding
// =========================================================================

#[test]
fn get_y_coordinate_recovers_generator() {
    let g = BandersnatchAffine::generator();
    let want_largest = g.y.lexicographically_largest();
    let y = BandersnatchAffine::get_y_coordinate(&g.x, want_largest).unwrap();
    assert_eq!(y, g.y);
    let y = BandersnatchAffine::get_y_coordinate(&g.x, !want_largest).unwrap();
    assert_eq!(y, -g.y);
}

#[test]
fn get_y_coordinate_rejects_x_with_no_point() {
    // x = 2 gives a non-residue for y^2 on Bandersnatch
    assert!(BandersnatchAffine::get_y_coordinate(&Fp::from_u64(2), true).is_none());
}

#[test]
fn compressed_generator_golden_bytes() {
    use crypto_bigint::Encoding;
    // generator y is not lexicographically largest, so no sign bit
    let g = BandersnatchAffine::generator();
    let expected = U256::from_be_hex(
        "29c132cc2c0b34c5743711777bbe42f32b79c022ad998465e1e71866a252ae18",
    )
    .to_be_bytes();
    assert_eq!(g.to_bytes(), expected);

    let expected = U256::from_be_hex(
        "4a2c7486fd924882bf02c6908de395122843e3e05264d7991e18e7985dad51e9",
    )
    .to_be_bytes();
    assert_eq!((-g).to_bytes(), expected);
}

#[test]
fn compressed_round_trip() {
    let g = BandersnatchAffine::generator();
    for k in 1u64..6 {
        let p = g.scalar_mul(&Fr::from_u64(k));
        let decoded = BandersnatchAffine::from_bytes(&p.to_bytes()).unwrap();
        assert_eq!(decoded, p);
    }
}

#[test]
fn from_bytes_rejects_out_of_range_x() {
    // x bytes decoding to a value >= p fail the strict decode
    use crypto_bigint::Encoding;
    let bytes = BandersnatchFpParams::MODULUS.to_be_bytes();
    assert!(BandersnatchAffine::from_bytes(&bytes).is_none());
}
