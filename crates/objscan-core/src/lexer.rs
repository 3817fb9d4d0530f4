//! Stateful scanning session.
//!
//! [`Lexer`] owns a cursor and a [`LineCounter`] and composes the
//! [`Buffer`] primitives, so a reader can walk a file line by line and
//! field by field without threading offsets by hand:
//!
//! ```rust
//! use objscan_core::Lexer;
//!
//! let mut lexer = Lexer::new(b"v 1 2 3\nv 4 5 6\n");
//! let mut coords = Vec::new();
//! while !lexer.is_eof() {
//!     let keyword = lexer.keyword();
//!     if lexer.slice(keyword) == b"v" {
//!         let mut xyz = [0.0; 3];
//!         lexer.floats(&mut xyz);
//!         coords.push(xyz);
//!     }
//!     lexer.skip_line();
//! }
//! assert_eq!(coords, vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
//! assert_eq!(lexer.line(), 2);
//! ```

use crate::buffer::Buffer;
use crate::classify::{Classify, ObjClassifier};
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::line::LineCounter;
use crate::token::Token;

/// A single line of the input, viewed without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line bytes (without the line terminator).
    pub text: &'a [u8],
    /// Byte range in the original input.
    pub span: Token,
    /// 1-based line number.
    pub number: u32,
}

impl<'a> Line<'a> {
    /// Check if this line contains only spaces and tabs.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.text.iter().all(|&b| b == b' ' || b == b'\t')
    }

    /// Check if the line starts with the given prefix.
    #[inline(always)]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.text.starts_with(prefix)
    }

    /// The line with leading and trailing ASCII whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a [u8] {
        self.text.trim_ascii()
    }
}

/// Scanning session over one buffer.
pub struct Lexer<'a, C = ObjClassifier> {
    buffer: Buffer<'a, C>,
    /// Current byte offset.
    offset: usize,
    /// Line terminators crossed so far.
    lines: LineCounter,
}

impl<'a> Lexer<'a, ObjClassifier> {
    /// Create a lexer over `input` with the Wavefront classifier.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self::from_buffer(Buffer::new(input))
    }
}

impl<'a, C: Classify> Lexer<'a, C> {
    /// Create a lexer over a prepared buffer.
    #[inline]
    pub fn from_buffer(buffer: Buffer<'a, C>) -> Self {
        Self {
            buffer,
            offset: 0,
            lines: LineCounter::new(),
        }
    }

    /// Replace the scan configuration.
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.buffer = self.buffer.with_config(config);
        self
    }

    /// Start scanning at `offset` instead of the beginning.
    pub fn with_offset(mut self, offset: usize) -> Result<Self, ScanError> {
        if offset > self.buffer.end() {
            return Err(ScanError::out_of_bounds(offset, self.buffer.end()));
        }
        self.offset = offset;
        Ok(self)
    }

    /// The underlying buffer.
    #[inline(always)]
    pub fn buffer(&self) -> &Buffer<'a, C> {
        &self.buffer
    }

    /// Get the current byte offset.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of line terminators crossed so far.
    #[inline(always)]
    pub fn line(&self) -> u32 {
        self.lines.get()
    }

    /// Check if all input has been consumed.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.end()
    }

    /// Check if the cursor has reached the scanning boundary, which
    /// includes the last byte of the buffer.
    #[inline(always)]
    pub fn at_boundary(&self) -> bool {
        self.buffer.is_end_of_buffer(self.offset)
    }

    /// Check if the cursor sits on a line terminator or the boundary, i.e.
    /// no further field can be read from the current line.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        self.at_boundary()
            || self
                .peek_byte()
                .is_some_and(|b| self.buffer.classifier().is_line_end(b))
    }

    /// Byte under the cursor, if any.
    #[inline(always)]
    pub fn peek_byte(&self) -> Option<u8> {
        self.buffer.bytes().get(self.offset).copied()
    }

    /// Advance to the start of the next line.
    ///
    /// Unlike [`Buffer::skip_line`], a `\r\n` pair is crossed as a single
    /// line break, so [`line`](Self::line) counts lines as an editor would.
    pub fn skip_line(&mut self) {
        let before = self.lines;
        self.offset = self.buffer.skip_line(self.offset, &mut self.lines);
        if self.lines == before {
            return;
        }
        if self.after_carriage_return() && self.peek_byte() == Some(b'\n') {
            self.offset = self.buffer.skip_indentation(self.offset + 1);
        }
        tracing::trace!(line = self.lines.get(), offset = self.offset, "line skipped");
    }

    /// True when the byte just behind the cursor is a `\r` terminator.
    fn after_carriage_return(&self) -> bool {
        self.offset
            .checked_sub(1)
            .and_then(|prev| self.buffer.bytes().get(prev))
            .is_some_and(|&b| b == b'\r' && self.buffer.classifier().is_line_end(b))
    }

    /// Skip separators, stopping at content or a line terminator.
    pub fn next_word(&mut self) {
        self.offset = self.buffer.next_word(self.offset);
    }

    /// Skip the current token and land on the next word.
    pub fn next_token(&mut self) {
        self.offset = self.buffer.next_token(self.offset);
    }

    /// Read the next word as a token view and move past it.
    pub fn keyword(&mut self) -> Token {
        let (offset, token) = self.buffer.word_token(self.offset, usize::MAX);
        self.offset = offset;
        token
    }

    /// Read the rest of the line as a name, keeping interior spaces.
    pub fn name(&mut self) -> String {
        let (offset, name) = self.buffer.name(self.offset);
        self.offset = offset;
        name
    }

    /// Read a single space-free name.
    pub fn name_no_space(&mut self) -> String {
        let (offset, name) = self.buffer.name_no_space(self.offset);
        self.offset = offset;
        name
    }

    /// Copy the next word into `out`. See [`Buffer::copy_next_word`].
    pub fn copy_word(&mut self, out: &mut [u8]) -> usize {
        let (offset, len) = self.buffer.copy_next_word(self.offset, out);
        self.offset = offset;
        len
    }

    /// Read the next word as a float; non-numeric text yields `0.0`.
    pub fn float(&mut self) -> f64 {
        let (offset, value) = self.buffer.float(self.offset);
        self.offset = offset;
        value
    }

    /// Read the next word as a float, failing on missing or malformed text.
    ///
    /// The cursor does not move when an error is returned.
    pub fn try_float(&mut self) -> Result<f64, ScanError> {
        let (offset, value) = self.buffer.try_float(self.offset)?;
        self.offset = offset;
        Ok(value)
    }

    /// Fill `out` with consecutive floats from the current line.
    ///
    /// Fields missing before the line ends are left untouched. Returns the
    /// number of fields read.
    pub fn floats(&mut self, out: &mut [f64]) -> usize {
        let mut count = 0;
        for slot in out.iter_mut() {
            self.next_word();
            if self.at_line_end() {
                break;
            }
            *slot = self.float();
            count += 1;
        }
        count
    }

    /// Look ahead for a line terminator after the cursor.
    pub fn has_line_end(&self) -> bool {
        self.buffer.has_line_end(self.offset)
    }

    /// Peek at the current line without consuming it.
    ///
    /// Returns `None` if at end of input.
    pub fn peek_line(&self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }

        let bytes = self.buffer.bytes();
        let start = self.offset;
        let end = self
            .buffer
            .classifier()
            .find_line_end(&bytes[start..])
            .map_or(bytes.len(), |pos| start + pos);

        Some(Line {
            text: &bytes[start..end],
            span: Token::new(start, end),
            number: self.lines.get().saturating_add(1),
        })
    }

    /// Consume and return the current line.
    ///
    /// Returns `None` if at end of input.
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let line = self.peek_line()?;
        self.skip_line();
        Some(line)
    }

    /// Borrow the bytes of a token taken from this lexer.
    #[inline(always)]
    pub fn slice(&self, token: Token) -> &'a [u8] {
        token.slice(self.buffer.bytes())
    }

    /// Get the remaining unconsumed input.
    #[inline(always)]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buffer.bytes()[self.offset..]
    }
}
