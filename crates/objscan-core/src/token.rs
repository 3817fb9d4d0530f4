//! Half-open byte ranges into a scanned buffer.

/// A `[start, end)` view into the buffer a scanner walked.
///
/// A token is not a copy. It stays valid only as long as the buffer it was
/// taken from, which is why name extraction copies into a `String` instead.
///
/// # Example
///
/// ```rust
/// use objscan_core::token::Token;
///
/// let token = Token::new(2, 9);
/// assert_eq!(token.len(), 7);
/// assert_eq!(token.slice(b"v polygon 1"), b"polygon");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Token {
    /// Starting byte offset (inclusive).
    pub start: usize,
    /// Ending byte offset (exclusive).
    pub end: usize,
}

impl Token {
    /// Create a token from byte offsets.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty token anchored at `offset`.
    #[inline]
    pub const fn empty_at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Borrow the bytes this token covers.
    ///
    /// Out-of-range tokens are clamped to `bytes`, yielding an empty slice
    /// rather than panicking.
    #[inline]
    pub fn slice<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        let end = self.end.min(bytes.len());
        let start = self.start.min(end);
        &bytes[start..end]
    }
}
