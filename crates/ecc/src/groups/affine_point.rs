use crate::fields::field::FieldElement;
use crate::groups::curve_params::{BaseField, CurveParams, ScalarField};

/// Bit 7 of the top big-endian byte carries the sign of y in the
/// compressed encoding. The top bit of x is always free because the base
/// field modulus is below 2^255. This is a repo-local convention, not
/// compatible with any other scheme's point compression.
const COMPRESSED_SIGN_MASK: u8 = 0x80;

/// A twisted Edwards curve point in affine coordinates (x, y).
///
/// The group identity is (0, 1), an ordinary affine point; there is no
/// separate point-at-infinity representation. Equality is exact
/// coordinate equality.
pub struct AffinePoint<C: CurveParams> {
    pub x: BaseField<C>,
    pub y: BaseField<C>,
}

impl<C: CurveParams> Clone for AffinePoint<C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: CurveParams> Copy for AffinePoint<C> {}

impl<C: CurveParams> std::fmt::Debug for AffinePoint<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AffinePoint({:?}, {:?})", self.x, self.y)
    }
}

impl<C: CurveParams> AffinePoint<C> {
    /// Construct from coordinates.
    #[inline]
    pub fn new(x: BaseField<C>, y: BaseField<C>) -> Self {
        Self { x, y }
    }

    /// The fixed public base point.
    #[inline]
    pub fn generator() -> Self {
        Self::new(C::generator_x(), C::generator_y())
    }

    /// The group identity (0, 1).
    #[inline]
    pub fn identity() -> Self {
        Self::new(BaseField::<C>::zero(), BaseField::<C>::one())
    }

    /// Negate: (x, y) -> (-x, y).
    #[inline]
    pub fn negate(&self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Unified twisted Edwards addition:
    ///
    /// `x3 = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2)`
    /// `y3 = (y1*y2 - a*x1*x2) / (1 - d*x1*x2*y1*y2)`
    ///
    /// Both denominators are non-zero for points on the curve because d is
    /// a non-square; a vanishing denominator means an operand was never a
    /// valid group element, which is fatal.
    pub fn add(&self, other: &Self) -> Self {
        let x1y2 = self.x * other.y;
        let y1x2 = self.y * other.x;
        let x1x2 = self.x * other.x;
        let y1y2 = self.y * other.y;

        let dxxyy = C::coeff_d() * x1x2 * y1y2;

        let x = (x1y2 + y1x2)
            .div(&(BaseField::<C>::one() + dxxyy))
            .expect("addition denominator vanished: operand is not a curve point");
        let y = (y1y2 - C::coeff_a() * x1x2)
            .div(&(BaseField::<C>::one() - dxxyy))
            .expect("addition denominator vanished: operand is not a curve point");

        Self::new(x, y)
    }

    /// Subtraction: `self + (-other)`.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Doubling via the squaring form:
    ///
    /// `x3 = 2*x1*y1 / (1 + d*x1^2*y1^2)`
    /// `y3 = (y1^2 - a*x1^2) / (1 - d*x1^2*y1^2)`
    ///
    /// Produces the same result as `add(self, self)`.
    pub fn double(&self) -> Self {
        let x_sq = self.x.square();
        let y_sq = self.y.square();
        let xy = self.x * self.y;

        let dxxyy = C::coeff_d() * x_sq * y_sq;

        let x = (xy + xy)
            .div(&(BaseField::<C>::one() + dxxyy))
            .expect("doubling denominator vanished: operand is not a curve point");
        let y = (y_sq - C::coeff_a() * x_sq)
            .div(&(BaseField::<C>::one() - dxxyy))
            .expect("doubling denominator vanished: operand is not a curve point");

        Self::new(x, y)
    }

    /// Check the curve equation `a*x^2 + y^2 == 1 + d*x^2*y^2`.
    pub fn is_on_curve(&self) -> bool {
        let x_sq = self.x.square();
        let y_sq = self.y.square();
        let lhs = C::coeff_a() * x_sq + y_sq;
        let rhs = BaseField::<C>::one() + C::coeff_d() * x_sq * y_sq;
        lhs == rhs
    }

    /// Double-and-add over the bits of the scalar's canonical big-endian
    /// encoding, most significant bit first. The result depends only on
    /// the scalar's value.
    pub fn scalar_mul(&self, scalar: &ScalarField<C>) -> Self {
        let mut result = Self::identity();
        for byte in scalar.to_be_bytes() {
            for bit in (0..8).rev() {
                result = result.double();
                if (byte >> bit) & 1 == 1 {
                    result = result.add(self);
                }
            }
        }
        result
    }

    /// Solve the curve equation for y given x:
    /// `y^2 = (a*x^2 - 1) / (d*x^2 - 1)`.
    ///
    /// `None` when no point with this x-coordinate exists. The returned
    /// root is selected so `lexicographically_largest(y) == want_largest`.
    pub fn get_y_coordinate(x: &BaseField<C>, want_largest: bool) -> Option<BaseField<C>> {
        let x_sq = x.square();
        let num = C::coeff_a() * x_sq - BaseField::<C>::one();
        let den = C::coeff_d() * x_sq - BaseField::<C>::one();
        let y = num.div(&den)?.sqrt()?;
        if y.lexicographically_largest() == want_largest {
            Some(y)
        } else {
            Some(-y)
        }
    }

    /// Compressed encoding: big-endian x with the sign of y folded into
    /// the top bit.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = self.x.to_be_bytes();
        if self.y.lexicographically_largest() {
            bytes[0] |= COMPRESSED_SIGN_MASK;
        }
        bytes
    }

    /// Inverse of [`Self::to_bytes`]: strict-decode x, recover y from the
    /// sign bit. `None` when x is out of range or off the curve.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let want_largest = bytes[0] & COMPRESSED_SIGN_MASK != 0;
        let mut x_bytes = *bytes;
        x_bytes[0] &= !COMPRESSED_SIGN_MASK;
        let x = BaseField::<C>::from_be_bytes(&x_bytes)?;
        let y = Self::get_y_coordinate(&x, want_largest)?;
        Some(Self::new(x, y))
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl<C: CurveParams> PartialEq for AffinePoint<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<C: CurveParams> Eq for AffinePoint<C> {}

impl<C: CurveParams> std::ops::Add for AffinePoint<C> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        AffinePoint::add(&self, &rhs)
    }
}

impl<C: CurveParams> std::ops::Sub for AffinePoint<C> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        AffinePoint::sub(&self, &rhs)
    }
}

impl<C: CurveParams> std::ops::Neg for AffinePoint<C> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<C: CurveParams> std::ops::Mul<ScalarField<C>> for AffinePoint<C> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: ScalarField<C>) -> Self {
        self.scalar_mul(&rhs)
    }
}

impl<C: CurveParams> std::ops::Mul<AffinePoint<C>> for FieldElement<<C as CurveParams>::ScalarFieldParams> {
    type Output = AffinePoint<C>;
    #[inline]
    fn mul(self, rhs: AffinePoint<C>) -> AffinePoint<C> {
        rhs.scalar_mul(&self)
    }
}
