//! Name extraction.
//!
//! Names are returned as owned strings: the cursor moves on right after the
//! call, and the trimmed range would otherwise dangle into a buffer the
//! caller is free to drop.

use crate::buffer::Buffer;
use crate::classify::Classify;
use crate::token::Token;

impl<'a, C: Classify> Buffer<'a, C> {
    /// Read the rest of the line as a name.
    ///
    /// Interior whitespace is kept, trailing spaces are trimmed. Returns the
    /// cursor the forward scan stopped at (a line terminator or the
    /// boundary) together with the name.
    ///
    /// ```rust
    /// use objscan_core::Buffer;
    ///
    /// let buf = Buffer::new(b"  hello world  \n");
    /// let (_, name) = buf.name(2);
    /// assert_eq!(name, "hello world");
    /// ```
    pub fn name(&self, it: usize) -> (usize, String) {
        let (it, token) = self.name_token(it);
        (it, self.to_owned_name(token))
    }

    /// Read a single space-free run as a name.
    ///
    /// Scanning stops at the first separator, so `"hello world"` yields
    /// `"hello"`.
    pub fn name_no_space(&self, it: usize) -> (usize, String) {
        let (it, token) = self.name_no_space_token(it);
        (it, self.to_owned_name(token))
    }

    /// Range [`name`](Self::name) would copy, without copying it.
    pub fn name_token(&self, it: usize) -> (usize, Token) {
        let it = self.checked(it);
        if self.is_end_of_buffer(it) {
            return (self.end(), Token::empty_at(self.end()));
        }

        let start = it;
        let it = self.scan_to_line_end(it);

        let mut trimmed = it;
        while trimmed > start && self.classifier().is_space(self.at(trimmed - 1)) {
            trimmed -= 1;
        }
        (it, Token::new(start, trimmed))
    }

    /// Range [`name_no_space`](Self::name_no_space) would copy.
    pub fn name_no_space_token(&self, it: usize) -> (usize, Token) {
        let it = self.checked(it);
        if self.is_end_of_buffer(it) {
            return (self.end(), Token::empty_at(self.end()));
        }

        let start = it;
        let classifier = self.classifier();
        let mut it = it;
        while !self.is_end_of_buffer(it)
            && !classifier.is_line_end(self.at(it))
            && !classifier.is_space_or_newline(self.at(it))
        {
            it += 1;
        }

        // Walk back over the stop byte and any separators before it. The
        // boundary byte counts as a separator here.
        let mut trimmed = it + 1;
        while trimmed > start {
            let probe = trimmed - 1;
            if !self.is_end_of_buffer(probe) && !classifier.is_space_or_newline(self.at(probe)) {
                break;
            }
            trimmed = probe;
        }
        (it, Token::new(start, trimmed))
    }

    fn to_owned_name(&self, token: Token) -> String {
        if token.is_empty() {
            return String::new();
        }
        String::from_utf8_lossy(token.slice(self.bytes())).into_owned()
    }
}
