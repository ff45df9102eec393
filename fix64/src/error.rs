use thiserror::Error;

/// Errors for fixed-point operations.
///
/// Every variant is a contract violation on the caller's side; none of them
/// is produced by rounding or overflow, which saturate instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fix64Error {
    /// Divisor (or the base of a negative power) was exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// `sqrt` called on a negative value.
    #[error("square root of a negative value")]
    NegativeSqrt,

    /// `log2` or `ln` called on zero or a negative value.
    #[error("logarithm of a non-positive value")]
    NonPositiveLog,

    /// `acos` called outside `[-1, 1]`.
    #[error("acos argument outside [-1, 1]")]
    AcosOutOfRange,

    /// `pow` called with a negative base and a non-zero exponent.
    #[error("negative base with non-zero exponent")]
    NegativeBase,
}

impl Fix64Error {
    /// Returns `true` for the domain-error variants (everything except
    /// [`Fix64Error::DivisionByZero`]).
    pub fn is_domain_error(&self) -> bool {
        !matches!(self, Fix64Error::DivisionByZero)
    }
}

/// Result type alias for fixed-point operations.
pub type FixResult<T> = Result<T, Fix64Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(Fix64Error::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            Fix64Error::NegativeSqrt.to_string(),
            "square root of a negative value"
        );
    }

    #[test]
    fn domain_error_classification() {
        assert!(!Fix64Error::DivisionByZero.is_domain_error());
        assert!(Fix64Error::NegativeSqrt.is_domain_error());
        assert!(Fix64Error::NonPositiveLog.is_domain_error());
        assert!(Fix64Error::AcosOutOfRange.is_domain_error());
        assert!(Fix64Error::NegativeBase.is_domain_error());
    }
}
