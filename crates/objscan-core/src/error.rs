use thiserror::Error;

/// Error kinds for categorizing scan errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Token text is not a number
    InvalidNumber,
    /// No token where one was required
    EmptyToken,
    /// Cursor positioned past the end of the buffer
    CursorOutOfBounds,
}

/// A scan error with the byte offset it was raised at.
///
/// The scanning primitives themselves never fail. Only the strict
/// conversions and session constructors report errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", offset_suffix(.offset))]
pub struct ScanError {
    /// Human-readable error message
    pub message: String,
    /// Byte offset where the offending token starts
    pub offset: Option<usize>,
    /// Error categorization
    pub kind: ScanErrorKind,
}

impl ScanError {
    /// Create a new scan error.
    pub fn new(kind: ScanErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: None,
            kind,
        }
    }

    /// Create an error for text that does not start like a number.
    pub fn invalid_number(text: &[u8]) -> Self {
        Self::new(
            ScanErrorKind::InvalidNumber,
            format!(
                "cannot parse \"{}\" as a real number",
                String::from_utf8_lossy(text)
            ),
        )
    }

    /// Create an error for a missing token.
    pub fn empty_token() -> Self {
        Self::new(ScanErrorKind::EmptyToken, "expected a token")
    }

    /// Create an error for a cursor beyond the buffer end.
    pub fn out_of_bounds(cursor: usize, len: usize) -> Self {
        Self::new(
            ScanErrorKind::CursorOutOfBounds,
            format!("cursor {cursor} is past the end of a {len} byte buffer"),
        )
    }

    /// Attach the byte offset the error refers to.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

fn offset_suffix(offset: &Option<usize>) -> String {
    match offset {
        Some(offset) => format!(" at byte {offset}"),
        None => String::new(),
    }
}
