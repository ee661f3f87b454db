use thiserror::Error;

/// Conversion failure.
///
/// `position` is an offset into the input slice, counted in input units
/// (bytes for [`decode`](crate::decode), code units for
/// [`encode`](crate::encode)), of the first unit of the offending sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GbkError {
    /// A two-unit sequence (GBK lead byte or UTF-16 high surrogate) is the
    /// last unit of the input.
    #[error("truncated input at offset {position}")]
    TruncatedInput { position: usize },
    /// Bytes that are not GBK, or code units that are not well-formed
    /// UTF-16/UTF-32.
    #[error("invalid sequence at offset {position}")]
    InvalidSequence { position: usize },
    /// A scalar value with no GBK encoding.
    #[error("U+{scalar:04X} at offset {position} has no GBK encoding")]
    Unrepresentable { position: usize, scalar: u32 },
    /// Fill mode was handed a buffer shorter than the converted output.
    #[error("output buffer of {capacity} units is too small (input offset {position})")]
    OutputTooSmall { position: usize, capacity: usize },
}

impl GbkError {
    /// Input offset the error refers to.
    pub fn position(&self) -> usize {
        match *self {
            GbkError::TruncatedInput { position }
            | GbkError::InvalidSequence { position }
            | GbkError::Unrepresentable { position, .. }
            | GbkError::OutputTooSmall { position, .. } => position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matrix() {
        assert_eq!(
            GbkError::TruncatedInput { position: 3 }.to_string(),
            "truncated input at offset 3"
        );
        assert_eq!(
            GbkError::InvalidSequence { position: 0 }.to_string(),
            "invalid sequence at offset 0"
        );
        assert_eq!(
            GbkError::Unrepresentable {
                position: 2,
                scalar: 0x20AC
            }
            .to_string(),
            "U+20AC at offset 2 has no GBK encoding"
        );
        assert_eq!(
            GbkError::Unrepresentable {
                position: 0,
                scalar: 0x1F600
            }
            .to_string(),
            "U+1F600 at offset 0 has no GBK encoding"
        );
    }

    #[test]
    fn position_accessor() {
        let err = GbkError::OutputTooSmall {
            position: 7,
            capacity: 4,
        };
        assert_eq!(err.position(), 7);
    }
}
