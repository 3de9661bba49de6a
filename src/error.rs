use std::fmt;

/// Returned when a sampling interval has its minimum above its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange;

impl fmt::Display for InvalidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minimum value cannot be greater than maximum value")
    }
}

impl std::error::Error for InvalidRange {}
