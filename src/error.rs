//! Construction errors.
//!
//! Everything else the control runs into (stale indices, touches outside the
//! hit area) degrades to "no visual change" instead of surfacing an error.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentedError {
    #[error("image count ({images}) does not match title count ({titles})")]
    LengthMismatch { images: usize, titles: usize },

    #[error("selected image count ({selected}) does not match image count ({images})")]
    SelectedImagesMismatch { images: usize, selected: usize },

    #[error("unsupported construction path: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, SegmentedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SegmentedError::LengthMismatch {
            images: 2,
            titles: 3,
        };
        assert_eq!(err.to_string(), "image count (2) does not match title count (3)");
        assert_eq!(
            SegmentedError::Unsupported("archive decoding").to_string(),
            "unsupported construction path: archive decoding"
        );
    }
}
