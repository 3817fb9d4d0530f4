//! Bounded word copy and float extraction.

use crate::buffer::Buffer;
use crate::classify::Classify;
use crate::error::ScanError;
use crate::number::{fast_atof, parse_real};
use crate::token::Token;

impl<'a, C: Classify> Buffer<'a, C> {
    /// Locate the next word, bounded to `capacity - 1` bytes.
    ///
    /// The capacity counts a terminator slot, mirroring
    /// [`copy_next_word`](Self::copy_next_word). When the bound cuts a word
    /// short, the returned cursor sits right after the last byte taken.
    pub fn word_token(&self, it: usize, capacity: usize) -> (usize, Token) {
        let mut it = self.next_word(it);
        let start = it;
        let limit = capacity.saturating_sub(1);

        while !self.is_end_of_buffer(it) && !self.classifier().is_space_or_newline(self.at(it)) {
            if it - start >= limit {
                break;
            }
            it += 1;
        }
        (it, Token::new(start, it))
    }

    /// Copy the next word into `out` and NUL-terminate it.
    ///
    /// The capacity is `out.len()`. At most `out.len() - 1` bytes are
    /// copied, so the terminator always fits; an empty `out` receives
    /// nothing. Returns the new cursor and the number of bytes copied.
    ///
    /// When a word is cut short, the returned cursor sits one past the last
    /// copied byte rather than on it, so the next scan resumes at the first
    /// byte that was not copied.
    ///
    /// ```rust
    /// use objscan_core::Buffer;
    ///
    /// let buf = Buffer::new(b"polygon 1 2\n");
    /// let mut out = [0xffu8; 4];
    /// let (_, len) = buf.copy_next_word(0, &mut out);
    /// assert_eq!(&out[..len], b"pol");
    /// assert_eq!(out[len], 0);
    /// ```
    pub fn copy_next_word(&self, it: usize, out: &mut [u8]) -> (usize, usize) {
        let (it, token) = self.word_token(it, out.len());
        if out.is_empty() {
            return (it, 0);
        }

        let word = token.slice(self.bytes());
        out[..word.len()].copy_from_slice(word);
        out[word.len()] = 0;
        (it, word.len())
    }

    /// Read the next word as a float.
    ///
    /// Never fails: text that is not a number converts to `0.0`, and the
    /// numeric prefix of mixed text such as `"1.5abc"` is used.
    pub fn float(&self, it: usize) -> (usize, f64) {
        let (it, token) = self.word_token(it, self.config().word_capacity);
        let value = fast_atof(token.slice(self.bytes()), self.config().decimal_comma);
        (it, value)
    }

    /// Read the next word as a float, reporting missing or malformed text.
    pub fn try_float(&self, it: usize) -> Result<(usize, f64), ScanError> {
        let (it, token) = self.word_token(it, self.config().word_capacity);
        if token.is_empty() {
            return Err(ScanError::empty_token().with_offset(token.start));
        }

        let value = parse_real(token.slice(self.bytes()), self.config().decimal_comma)
            .map_err(|e| e.with_offset(token.start))?;
        Ok((it, value))
    }
}
