//! Scanner configuration.

/// Default capacity of the bounded word extraction used for floats.
pub const DEFAULT_WORD_CAPACITY: usize = 1024;

/// Knobs shared by [`Buffer`](crate::Buffer) and [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Capacity, terminator included, of the word a float is read from.
    /// Longer tokens are truncated to `word_capacity - 1` bytes.
    pub word_capacity: usize,
    /// Accept `,` as the decimal separator when converting floats.
    pub decimal_comma: bool,
}

impl ScanConfig {
    #[inline]
    pub const fn new() -> Self {
        Self {
            word_capacity: DEFAULT_WORD_CAPACITY,
            decimal_comma: false,
        }
    }

    /// Set the bounded word capacity used by float extraction.
    pub fn with_word_capacity(mut self, capacity: usize) -> Self {
        self.word_capacity = capacity;
        self
    }

    /// Enable or disable comma decimal separators.
    pub fn with_decimal_comma(mut self, enabled: bool) -> Self {
        self.decimal_comma = enabled;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}
