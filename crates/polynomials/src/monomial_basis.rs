use verkle_ecc::fields::field::FieldElement;
use verkle_ecc::fields::field_params::FieldParams;

use crate::error::Error;

/// A polynomial in coefficient form: `coeffs[i]` is the coefficient of
/// `X^i`. Trailing zero coefficients are trimmed, so the zero polynomial
/// is the empty vector.
pub struct MonomialBasis<P: FieldParams> {
    coeffs: Vec<FieldElement<P>>,
}

impl<P: FieldParams> Clone for MonomialBasis<P> {
    fn clone(&self) -> Self {
        Self {
            coeffs: self.coeffs.clone(),
        }
    }
}

impl<P: FieldParams> std::fmt::Debug for MonomialBasis<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MonomialBasis").field(&self.coeffs).finish()
    }
}

impl<P: FieldParams> PartialEq for MonomialBasis<P> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<P: FieldParams> Eq for MonomialBasis<P> {}

impl<P: FieldParams> MonomialBasis<P> {
    /// Construct from low-to-high coefficients, trimming trailing zeros.
    pub fn new(mut coeffs: Vec<FieldElement<P>>) -> Self {
        while coeffs.last().is_some_and(FieldElement::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn coeffs(&self) -> &[FieldElement<P>] {
        &self.coeffs
    }

    /// Degree of the polynomial; the zero polynomial reports 0.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Evaluate at `z` using Horner's method.
    pub fn evaluate(&self, z: &FieldElement<P>) -> FieldElement<P> {
        let n = self.coeffs.len();
        if n == 0 {
            return FieldElement::zero();
        }
        let mut result = self.coeffs[n - 1];
        for i in (0..n - 1).rev() {
            result = result * *z + self.coeffs[i];
        }
        result
    }

    /// The monic polynomial whose roots are exactly the domain points:
    /// `prod_i (X - domain[i])`, built by iterative linear-factor
    /// multiplication.
    pub fn vanishing_polynomial(domain: &[FieldElement<P>]) -> Self {
        let mut coeffs = vec![FieldElement::<P>::zero(); domain.len() + 1];
        coeffs[0] = FieldElement::one();
        let mut degree = 0usize;
        for point in domain {
            degree += 1;
            // multiply by (X - point), high-to-low to avoid overwrites
            for k in (1..=degree).rev() {
                coeffs[k] = coeffs[k - 1] - coeffs[k] * *point;
            }
            coeffs[0] = -coeffs[0] * *point;
        }
        Self { coeffs }
    }

    /// Exact polynomial long division. `Err(ZeroDivisor)` for a zero
    /// divisor; `Err(InexactDivision)` when a non-zero remainder survives.
    pub fn divide(&self, divisor: &Self) -> Result<Self, Error> {
        if divisor.is_zero() {
            return Err(Error::ZeroDivisor);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let divisor_degree = divisor.coeffs.len() - 1;
        if self.coeffs.len() - 1 < divisor_degree {
            return Err(Error::InexactDivision);
        }

        let leading_inverse = divisor.coeffs[divisor_degree]
            .invert()
            .expect("trimmed divisor has a non-zero leading coefficient");

        let mut remainder = self.coeffs.clone();
        let quotient_len = remainder.len() - divisor_degree;
        let mut quotient = vec![FieldElement::<P>::zero(); quotient_len];
        for i in (0..quotient_len).rev() {
            let factor = remainder[i + divisor_degree] * leading_inverse;
            quotient[i] = factor;
            for (j, divisor_coeff) in divisor.coeffs.iter().enumerate() {
                remainder[i + j] = remainder[i + j] - factor * *divisor_coeff;
            }
        }

        if remainder.iter().any(|c| !c.is_zero()) {
            return Err(Error::InexactDivision);
        }
        Ok(Self::new(quotient))
    }

    /// Synthetic division by the linear factor `(X - root)`.
    /// `Err(InexactDivision)` when `root` is not actually a root.
    pub fn divide_by_linear(&self, root: &FieldElement<P>) -> Result<Self, Error> {
        let n = self.coeffs.len();
        if n == 0 {
            return Ok(Self::zero());
        }
        let mut quotient = vec![FieldElement::<P>::zero(); n - 1];
        let mut work = self.coeffs[n - 1];
        for i in (0..n - 1).rev() {
            quotient[i] = work;
            work = self.coeffs[i] + work * *root;
        }
        if !work.is_zero() {
            return Err(Error::InexactDivision);
        }
        Ok(Self::new(quotient))
    }
}
