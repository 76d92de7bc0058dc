use alloc::string::String;
use core::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedError {
    Empty,
    InvalidDigit { input: String },
    Overflow { input: String },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "seed is empty"),
            Self::InvalidDigit { input } => write!(
                f,
                "invalid seed {input:?}: expected a decimal or 0x-prefixed hex integer"
            ),
            Self::Overflow { input } => {
                write!(f, "seed {input:?} does not fit in 64 bits")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeedError {}
