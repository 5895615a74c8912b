/// Misuse of the polynomial API. These are programmer or protocol errors,
/// distinct from the expected absent-value outcomes (`Option`) in the
/// field layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("lagrange operands are defined over different domains")]
    DomainMismatch,
    #[error("evaluation point lies on the domain, where the barycentric identity is undefined")]
    PointOnDomain,
    #[error("polynomial division left a non-zero remainder")]
    InexactDivision,
    #[error("cannot divide by the zero polynomial")]
    ZeroDivisor,
    #[error("expected {expected} evaluations for the domain, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
