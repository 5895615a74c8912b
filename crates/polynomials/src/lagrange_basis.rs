use verkle_ecc::fields::field::FieldElement;
use verkle_ecc::fields::field_params::FieldParams;

use crate::error::Error;
use crate::monomial_basis::MonomialBasis;

/// A polynomial in evaluation form: its values at each point of a fixed
/// ordered domain. Binary operations require both operands to share an
/// identical domain (same points, same order).
pub struct LagrangeBasis<P: FieldParams> {
    evaluations: Vec<FieldElement<P>>,
    domain: Vec<FieldElement<P>>,
}

impl<P: FieldParams> Clone for LagrangeBasis<P> {
    fn clone(&self) -> Self {
        Self {
            evaluations: self.evaluations.clone(),
            domain: self.domain.clone(),
        }
    }
}

impl<P: FieldParams> std::fmt::Debug for LagrangeBasis<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LagrangeBasis")
            .field("evaluations", &self.evaluations)
            .field("domain", &self.domain)
            .finish()
    }
}

impl<P: FieldParams> PartialEq for LagrangeBasis<P> {
    fn eq(&self, other: &Self) -> bool {
        self.evaluations == other.evaluations && self.domain == other.domain
    }
}

impl<P: FieldParams> Eq for LagrangeBasis<P> {}

impl<P: FieldParams> LagrangeBasis<P> {
    /// Construct from parallel evaluation and domain vectors.
    /// `Err(LengthMismatch)` unless every domain slot has a value.
    pub fn new(
        evaluations: Vec<FieldElement<P>>,
        domain: Vec<FieldElement<P>>,
    ) -> Result<Self, Error> {
        if evaluations.len() != domain.len() {
            return Err(Error::LengthMismatch {
                expected: domain.len(),
                actual: evaluations.len(),
            });
        }
        Ok(Self {
            evaluations,
            domain,
        })
    }

    pub fn values(&self) -> &[FieldElement<P>] {
        &self.evaluations
    }

    pub fn domain(&self) -> &[FieldElement<P>] {
        &self.domain
    }

    fn pointwise(
        &self,
        other: &Self,
        op: impl Fn(FieldElement<P>, FieldElement<P>) -> FieldElement<P>,
    ) -> Result<Self, Error> {
        if self.domain != other.domain {
            return Err(Error::DomainMismatch);
        }
        let evaluations = self
            .evaluations
            .iter()
            .zip(&other.evaluations)
            .map(|(lhs, rhs)| op(*lhs, *rhs))
            .collect();
        Ok(Self {
            evaluations,
            domain: self.domain.clone(),
        })
    }

    /// Pointwise addition; fails unless the domains are identical.
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        self.pointwise(other, |lhs, rhs| lhs + rhs)
    }

    /// Pointwise subtraction; fails unless the domains are identical.
    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        self.pointwise(other, |lhs, rhs| lhs - rhs)
    }

    /// Pointwise multiplication; fails unless the domains are identical.
    pub fn mul(&self, other: &Self) -> Result<Self, Error> {
        self.pointwise(other, |lhs, rhs| lhs * rhs)
    }

    /// Pointwise multiplication by a scalar constant.
    pub fn scale(&self, constant: &FieldElement<P>) -> Self {
        Self {
            evaluations: self
                .evaluations
                .iter()
                .map(|value| *value * *constant)
                .collect(),
            domain: self.domain.clone(),
        }
    }

    /// The barycentric weight polynomial over `domain`:
    /// `w[i] = 1 / prod_{j != i} (domain[i] - domain[j])`, batch-inverted.
    /// Suitable as the `weights` argument of
    /// [`Self::evaluate_outside_domain`].
    pub fn evaluate_lagrange_coefficients(domain: &[FieldElement<P>]) -> Self {
        let mut denominators = vec![FieldElement::<P>::one(); domain.len()];
        for (i, point) in domain.iter().enumerate() {
            for (j, other) in domain.iter().enumerate() {
                if i != j {
                    denominators[i] = denominators[i] * (*point - *other);
                }
            }
        }
        Self {
            evaluations: FieldElement::batch_invert(&denominators),
            domain: domain.to_vec(),
        }
    }

    /// Evaluate at a point `z` off the domain via the barycentric identity
    ///
    /// `A(z) * sum_i values[i] * weights[i] / (z - domain[i])`
    ///
    /// where `A` is the domain's vanishing polynomial. All the
    /// `1/(z - domain[i])` terms are computed with one batch inversion.
    /// `Err(PointOnDomain)` when `A(z) = 0`, which makes the identity
    /// undefined.
    pub fn evaluate_outside_domain(
        &self,
        weights: &Self,
        z: &FieldElement<P>,
    ) -> Result<FieldElement<P>, Error> {
        if self.domain != weights.domain {
            return Err(Error::DomainMismatch);
        }

        let vanishing = MonomialBasis::vanishing_polynomial(&self.domain);
        let vanishing_at_z = vanishing.evaluate(z);
        if vanishing_at_z.is_zero() {
            return Err(Error::PointOnDomain);
        }

        let shifted: Vec<FieldElement<P>> =
            self.domain.iter().map(|point| *z - *point).collect();
        let inverses = FieldElement::batch_invert(&shifted);

        let mut result = FieldElement::<P>::zero();
        for ((value, weight), inverse) in self
            .evaluations
            .iter()
            .zip(&weights.evaluations)
            .zip(&inverses)
        {
            result += *value * *weight * *inverse;
        }
        Ok(result * vanishing_at_z)
    }

    /// Convert to coefficient form.
    ///
    /// Builds each numerator `N_i = A / (X - domain[i])` by synthetic
    /// division of the vanishing polynomial, batch-inverts the
    /// denominators `N_i(domain[i])`, and accumulates
    /// `values[i] * N_i(domain[i])^-1 * N_i`.
    pub fn interpolate(&self) -> MonomialBasis<P> {
        let vanishing = MonomialBasis::vanishing_polynomial(&self.domain);

        let numerators: Vec<MonomialBasis<P>> = self
            .domain
            .iter()
            .map(|point| {
                vanishing
                    .divide_by_linear(point)
                    .expect("domain point is a root of its own vanishing polynomial")
            })
            .collect();

        let denominators: Vec<FieldElement<P>> = numerators
            .iter()
            .zip(&self.domain)
            .map(|(numerator, point)| numerator.evaluate(point))
            .collect();
        let inverse_denominators = FieldElement::batch_invert(&denominators);

        let mut coeffs = vec![FieldElement::<P>::zero(); self.domain.len()];
        for ((numerator, value), inverse) in numerators
            .iter()
            .zip(&self.evaluations)
            .zip(&inverse_denominators)
        {
            let scaled = *value * *inverse;
            for (coeff, numerator_coeff) in coeffs.iter_mut().zip(numerator.coeffs()) {
                *coeff += scaled * *numerator_coeff;
            }
        }
        MonomialBasis::new(coeffs)
    }
}
