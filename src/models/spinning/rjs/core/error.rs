use thiserror::Error;

/// Errors that can occur while evaluating the spinning relations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A caller supplied a quantity outside the range the physics requires.
    ///
    /// Always a programming or configuration mistake; never retried.
    #[error("invalid parameter: {context}")]
    InvalidParameter { context: String },

    /// The parameter combination admits no physically meaningful result.
    ///
    /// A sweep driver may skip the offending sample and continue.
    #[error("outside the physical regime: {context}")]
    InvalidRegime { context: String },

    /// A denominator that the parameter invariants make structurally
    /// impossible turned out to be zero.
    ///
    /// Indicates a broken invariant elsewhere; treated as fatal.
    #[error("division by zero: {context}")]
    DivisionByZero { context: String },
}
