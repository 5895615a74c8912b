use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crypto_bigint::Encoding;
use verkle_numeric::{U256, U256Ext, U512};

use super::field_params::FieldParams;

/// A prime field element, generic over parameters `P`.
///
/// Stores a single `U256` value that is always fully reduced into `[0, p)`.
/// Every operation returns a new, independent element; there is no aliased
/// in-place arithmetic.
pub struct FieldElement<P: FieldParams> {
    value: U256,
    _phantom: PhantomData<P>,
}

// Manual Clone/Copy because PhantomData<P> doesn't require P: Copy
impl<P: FieldParams> Clone for FieldElement<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams> Copy for FieldElement<P> {}

impl<P: FieldParams> std::fmt::Debug for FieldElement<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let w = self.value.limbs();
        write!(
            f,
            "FieldElement(0x{:016x}{:016x}{:016x}{:016x})",
            w[3], w[2], w[1], w[0]
        )
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl<P: FieldParams> FieldElement<P> {
    /// Zero element (additive identity).
    #[inline]
    pub const fn zero() -> Self {
        Self::from_raw(U256::ZERO)
    }

    /// One element (multiplicative identity).
    #[inline]
    pub const fn one() -> Self {
        Self::from_raw(U256::ONE)
    }

    /// Construct from a value already known to be reduced into [0, p).
    /// Used for parameter-table constants.
    #[inline]
    pub const fn from_raw(value: U256) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Construct from an arbitrary 256-bit integer, reducing mod p.
    pub fn reduce(value: U256) -> Self {
        let modulus = P::MODULUS.to_nz().expect("modulus is non-zero");
        let (_, remainder) = value.div_rem(&modulus);
        Self::from_raw(remainder)
    }

    /// Construct from a u64, reducing mod p.
    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Self::reduce(U256::from_u64(value))
    }

    /// Construct from an i64; negative values are reduced via modular
    /// subtraction from zero.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        if value < 0 {
            -Self::from_u64(value.unsigned_abs())
        } else {
            Self::from_u64(value as u64)
        }
    }

    /// Strict decode from 32 big-endian bytes: `None` when the decoded
    /// integer is not below the modulus.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let value = U256::from_be_bytes(*bytes);
        if value >= P::MODULUS {
            None
        } else {
            Some(Self::from_raw(value))
        }
    }

    /// Decode from 32 big-endian bytes, always reducing mod p.
    pub fn from_be_bytes_reduced(bytes: &[u8; 32]) -> Self {
        Self::reduce(U256::from_be_bytes(*bytes))
    }

    /// Generate a uniformly random field element.
    ///
    /// Samples 512 random bits and reduces mod p so the bias is negligible.
    pub fn random_element() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let lo = U256::from_words([
            rng.random::<u64>(),
            rng.random::<u64>(),
            rng.random::<u64>(),
            rng.random::<u64>(),
        ]);
        let hi = U256::from_words([
            rng.random::<u64>(),
            rng.random::<u64>(),
            rng.random::<u64>(),
            rng.random::<u64>(),
        ]);
        Self::reduce_wide(U512::from((lo, hi)))
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

impl<P: FieldParams> FieldElement<P> {
    /// Reduce a 512-bit value modulo the field modulus.
    fn reduce_wide(wide: U512) -> Self {
        let modulus_wide = U512::from((P::MODULUS, U256::ZERO));
        let nz_mod = modulus_wide.to_nz().expect("modulus is non-zero");
        let (_, remainder) = wide.div_rem(&nz_mod);
        let words = remainder.to_words();
        Self::from_raw(U256::from_words([words[0], words[1], words[2], words[3]]))
    }

    /// The raw integer value, reduced into [0, p).
    #[inline]
    pub fn value(&self) -> U256 {
        self.value
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == U256::ZERO
    }

    /// Modular addition.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_raw(self.value.add_mod(&other.value, &P::MODULUS))
    }

    /// Modular subtraction.
    #[inline]
    pub fn subtract(&self, other: &Self) -> Self {
        Self::from_raw(self.value.sub_mod(&other.value, &P::MODULUS))
    }

    /// Negate: returns (p - self) mod p.
    #[inline]
    pub fn negate(&self) -> Self {
        Self::from_raw(self.value.neg_mod(&P::MODULUS))
    }

    /// Modular multiplication via a 512-bit product and wide reduction.
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let wide: U512 = self.value.widening_mul(&other.value);
        Self::reduce_wide(wide)
    }

    #[inline]
    pub fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Exponentiation via MSB-first square-and-multiply. `0^0 = 1`.
    pub fn pow(&self, exp: &U256) -> Self {
        if *exp == U256::ZERO {
            return Self::one();
        }
        if self.is_zero() {
            return Self::zero();
        }
        let mut accumulator = *self;
        for i in (0..exp.get_msb()).rev() {
            accumulator = accumulator.square();
            if exp.get_bit(i) {
                accumulator = accumulator.multiply(self);
            }
        }
        accumulator
    }

    /// Modular inverse via Fermat's little theorem: self^(p-2).
    /// `None` for zero, which has no inverse.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let exp = P::MODULUS.wrapping_sub(&U256::from_u64(2));
        Some(self.pow(&exp))
    }

    /// Division: `self * other^(-1)`. `None` when `other` is zero.
    pub fn div(&self, other: &Self) -> Option<Self> {
        other.invert().map(|inverse| self.multiply(&inverse))
    }

    /// Square root via Tonelli-Shanks. `None` for non-residues; zero maps
    /// to zero. Which of the two roots is returned is unspecified; callers
    /// pick a sign with [`Self::lexicographically_largest`].
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }
        // Euler criterion: a^((p-1)/2) == 1 iff a is a residue
        if self.pow(&P::MODULUS_MINUS_ONE_DIV_TWO) != Self::one() {
            return None;
        }

        // Factor p - 1 = q * 2^s with q odd
        let mut q = P::MODULUS.wrapping_sub(&U256::ONE);
        let mut s = 0u32;
        while !q.get_bit(0) {
            q = q.wrapping_shr_vartime(1);
            s += 1;
        }

        // Smallest quadratic non-residue (try 2, 3, 4, ...)
        let mut z = Self::from_u64(2);
        while z.pow(&P::MODULUS_MINUS_ONE_DIV_TWO) == Self::one() {
            z = z + Self::one();
        }

        let mut m = s;
        let mut c = z.pow(&q);
        let mut t = self.pow(&q);
        let q_plus_one_div_two = q.wrapping_add(&U256::ONE).wrapping_shr_vartime(1);
        let mut r = self.pow(&q_plus_one_div_two);

        loop {
            if t == Self::one() {
                return Some(r);
            }
            // Least i with t^(2^i) == 1
            let mut i = 1u32;
            let mut tmp = t.square();
            while tmp != Self::one() {
                tmp = tmp.square();
                i += 1;
                if i >= m {
                    return None;
                }
            }
            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }
            m = i;
            c = b.square();
            t = t.multiply(&c);
            r = r.multiply(&b);
        }
    }

    /// True iff the integer value exceeds (p - 1) / 2. Used to pick a
    /// canonical sign when encoding.
    #[inline]
    pub fn lexicographically_largest(&self) -> bool {
        self.value > P::MODULUS_MINUS_ONE_DIV_TWO
    }

    /// Invert a batch of elements with a single field inversion.
    ///
    /// Zero entries are a supported case: each zero input maps to a zero
    /// output, and every non-zero input maps to its inverse. Zero operands
    /// are folded into the running product as `one` so the accumulated
    /// product stays invertible through both passes.
    pub fn batch_invert(values: &[Self]) -> Vec<Self> {
        if values.is_empty() {
            return Vec::new();
        }

        // Forward pass: partials[i] = product of the first i (substituted) inputs
        let mut partials = Vec::with_capacity(values.len() + 1);
        partials.push(Self::one());
        for value in values {
            let running = partials[partials.len() - 1];
            partials.push(if value.is_zero() {
                running
            } else {
                running.multiply(value)
            });
        }

        let mut inverse = partials[values.len()]
            .invert()
            .expect("running product of substituted operands is non-zero");

        // Unwind: roll the accumulator back one operand at a time
        let mut outputs = vec![Self::zero(); values.len()];
        for i in (0..values.len()).rev() {
            if !values[i].is_zero() {
                outputs[i] = partials[i].multiply(&inverse);
                inverse = inverse.multiply(&values[i]);
            }
        }
        outputs
    }

    /// Serialize to 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.value.to_be_bytes()
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl<P: FieldParams> Add for FieldElement<P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        FieldElement::add(&self, &rhs)
    }
}

impl<P: FieldParams> AddAssign for FieldElement<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = FieldElement::add(self, &rhs);
    }
}

impl<P: FieldParams> Sub for FieldElement<P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        FieldElement::subtract(&self, &rhs)
    }
}

impl<P: FieldParams> SubAssign for FieldElement<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = FieldElement::subtract(self, &rhs);
    }
}

impl<P: FieldParams> Mul for FieldElement<P> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        FieldElement::multiply(&self, &rhs)
    }
}

impl<P: FieldParams> MulAssign for FieldElement<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = FieldElement::multiply(self, &rhs);
    }
}

impl<P: FieldParams> Neg for FieldElement<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        FieldElement::negate(&self)
    }
}

impl<P: FieldParams> PartialEq for FieldElement<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<P: FieldParams> Eq for FieldElement<P> {}

impl<P: FieldParams> PartialOrd for FieldElement<P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: FieldParams> Ord for FieldElement<P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
