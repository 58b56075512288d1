//! Error types for integer parsing

use thiserror::Error;

/// Records a failed conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("strconv.{func}: parsing '{num}': {err}")]
pub struct NumError {
    /// the failing function (parse_int, parse_uint)
    pub func: String,
    /// the input
    pub num: String,
    /// the reason the conversion failed
    #[source]
    pub err: NumErrorCause,
}

/// Reason of conversion failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumErrorCause {
    #[error("invalid base {0}")]
    InvalidBase(u8),

    #[error("invalid bit size {0}")]
    InvalidBitSize(u8),

    #[error("invalid syntax")]
    InvalidSyntax,

    /// Indicates that a signed value is out of range for the requested
    /// size; `bound_hint` is the closest representable value.
    #[error("value out of range")]
    OutOfRangeSigned { bound_hint: i64 },

    /// Indicates that a unsigned value is out of range for the requested
    /// size; `bound_hint` is the largest representable value.
    #[error("value out of range")]
    OutOfRangeUnsigned { bound_hint: u64 },
}

impl NumError {
    pub fn new(func: &str, num: &str, err: NumErrorCause) -> Self {
        Self {
            func: func.to_string(),
            num: num.to_string(),
            err,
        }
    }

    pub(crate) fn syntax(func: &str, num: &str) -> Self {
        Self::new(func, num, NumErrorCause::InvalidSyntax)
    }

    pub(crate) fn range_signed(func: &str, num: &str, bound_hint: i64) -> Self {
        Self::new(func, num, NumErrorCause::OutOfRangeSigned { bound_hint })
    }

    pub(crate) fn range_unsigned(func: &str, num: &str, bound_hint: u64) -> Self {
        Self::new(func, num, NumErrorCause::OutOfRangeUnsigned { bound_hint })
    }

    /// True when the input was well-formed but did not fit
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self.err,
            NumErrorCause::OutOfRangeSigned { .. } | NumErrorCause::OutOfRangeUnsigned { .. }
        )
    }
}
