use core::fmt;

/// Errors reported by the transforms and their helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The sequence length is zero or not a power of two.
    InvalidLength { len: usize },
    /// Input and output buffers differ in length.
    MismatchedLengths { input: usize, output: usize },
    /// A domain scale that is not finite and strictly positive.
    InvalidScale,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "sequence length {len} is not a power of two")
            }
            Self::MismatchedLengths { input, output } => {
                write!(f, "input length {input} does not match output length {output}")
            }
            Self::InvalidScale => f.write_str("domain scale must be finite and positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
