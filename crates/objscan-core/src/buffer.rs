//! Cursor primitives over a borrowed byte buffer.
//!
//! A cursor is a plain byte offset into [`Buffer::bytes`]. The end sentinel
//! is `bytes.len()`: a cursor may sit anywhere in `0..=len`, and every
//! primitive takes a cursor and hands back an updated one.
//!
//! # The boundary rule
//!
//! [`Buffer::is_end_of_buffer`] reports exhaustion one byte early: both the
//! end sentinel and the last byte count as "at the boundary". Every scan
//! loop uses it as its continuation test, so the final byte of a buffer is
//! never consumed as an ordinary scan step. Readers written against this
//! layer rely on the trailing byte (normally a newline) acting as a
//! terminator, so the rule is kept exactly.

use crate::classify::{Classify, ObjClassifier};
use crate::config::ScanConfig;
use crate::line::LineCounter;

/// An immutable byte buffer together with its classification rules.
///
/// `Buffer` is `Copy`; it only borrows the bytes it scans.
#[derive(Debug, Clone, Copy)]
pub struct Buffer<'a, C = ObjClassifier> {
    bytes: &'a [u8],
    classifier: C,
    config: ScanConfig,
}

impl<'a> Buffer<'a, ObjClassifier> {
    /// Wrap `bytes` using the Wavefront classifier.
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_classifier(bytes, ObjClassifier)
    }
}

impl<'a, C: Classify> Buffer<'a, C> {
    /// Wrap `bytes` using a custom classifier.
    #[inline]
    pub fn with_classifier(bytes: &'a [u8], classifier: C) -> Self {
        Self {
            bytes,
            classifier,
            config: ScanConfig::default(),
        }
    }

    /// Replace the scan configuration.
    #[inline]
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// The scanned bytes.
    #[inline(always)]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The end sentinel, one past the last valid byte.
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    #[inline(always)]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Byte at `it`. Callers only index positions before the boundary, so
    /// `it < end` always holds here.
    #[inline(always)]
    pub(crate) fn at(&self, it: usize) -> u8 {
        self.bytes[it]
    }

    /// Clamp a cursor that violates `it <= end`.
    #[inline(always)]
    pub(crate) fn checked(&self, it: usize) -> usize {
        debug_assert!(
            it <= self.end(),
            "cursor {it} past end of {} byte buffer",
            self.end()
        );
        it.min(self.end())
    }

    /// True when `it` is the end sentinel or the last byte of the buffer.
    ///
    /// ```rust
    /// use objscan_core::Buffer;
    ///
    /// let buf = Buffer::new(b"abc");
    /// assert!(!buf.is_end_of_buffer(1));
    /// assert!(buf.is_end_of_buffer(2));
    /// assert!(buf.is_end_of_buffer(3));
    /// ```
    #[inline(always)]
    pub fn is_end_of_buffer(&self, it: usize) -> bool {
        let end = self.end();
        if it == end {
            return true;
        }
        it == end.wrapping_sub(1)
    }

    /// Skip separators up to the start of the next word.
    ///
    /// Stops on content, on a line terminator (which is never skipped), or
    /// at the boundary.
    #[inline]
    pub fn next_word(&self, it: usize) -> usize {
        let mut it = self.checked(it);
        while !self.is_end_of_buffer(it) {
            let byte = self.at(it);
            if !self.classifier.is_space_or_newline(byte) || self.classifier.is_line_end(byte) {
                break;
            }
            it += 1;
        }
        it
    }

    /// Skip the rest of the current token, then land on the next word.
    #[inline]
    pub fn next_token(&self, it: usize) -> usize {
        let mut it = self.checked(it);
        while !self.is_end_of_buffer(it) {
            if self.classifier.is_space_or_newline(self.at(it)) {
                break;
            }
            it += 1;
        }
        self.next_word(it)
    }

    /// Advance past the next line terminator and any indentation after it.
    ///
    /// `lines` is bumped once when a line is crossed. A scan that stops on
    /// the last byte of the buffer also counts, so an unterminated final
    /// line is still a line.
    pub fn skip_line(&self, it: usize, lines: &mut LineCounter) -> usize {
        let end = self.end();
        if it >= end {
            return it;
        }

        let mut it = self.scan_to_line_end(it);
        if it != end {
            it += 1;
            lines.increment();
        }

        self.skip_indentation(it)
    }

    /// Skip literal spaces and tabs, stopping at `end`.
    #[inline]
    pub(crate) fn skip_indentation(&self, mut it: usize) -> usize {
        while it != self.end() && matches!(self.at(it), b'\t' | b' ') {
            it += 1;
        }
        it
    }

    /// Look ahead for a line terminator between `it` and the boundary.
    ///
    /// The byte under `it` is not inspected; the probe steps first and then
    /// tests, up to and including the last byte of the buffer.
    pub fn has_line_end(&self, it: usize) -> bool {
        let it = self.checked(it);
        if self.is_end_of_buffer(it) {
            return false;
        }
        self.classifier
            .find_line_end(&self.bytes[it + 1..])
            .is_some()
    }

    /// Forward scan to the first line terminator, stopping at the boundary.
    ///
    /// Requires `it < end`. The result is at most `end - 1`.
    #[inline]
    pub(crate) fn scan_to_line_end(&self, it: usize) -> usize {
        let last = self.end() - 1;
        if it >= last {
            return it;
        }
        match self.classifier.find_line_end(&self.bytes[it..last]) {
            Some(pos) => it + pos,
            None => last,
        }
    }
}
