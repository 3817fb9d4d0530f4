//! Byte classification used by every scanner.
//!
//! Scanners never hard-code separators. They ask a [`Classify`]
//! implementation, so a format with different line terminators can plug in
//! its own rules. [`ObjClassifier`] covers Wavefront OBJ/MTL and is the
//! default everywhere.

use memchr::{memchr, memchr3};

/// Character predicates consumed by the scanners.
pub trait Classify {
    /// Horizontal separator (space, tab).
    fn is_space(&self, byte: u8) -> bool;

    /// Line terminator.
    fn is_line_end(&self, byte: u8) -> bool;

    /// Any separator: horizontal whitespace or a line terminator.
    #[inline(always)]
    fn is_space_or_newline(&self, byte: u8) -> bool {
        self.is_space(byte) || self.is_line_end(byte)
    }

    /// Offset of the first line terminator in `bytes`, if any.
    ///
    /// Implementations may override this with a vectorized search; the
    /// default walks the slice byte by byte.
    #[inline]
    fn find_line_end(&self, bytes: &[u8]) -> Option<usize> {
        bytes.iter().position(|&b| self.is_line_end(b))
    }
}

/// Classifier for Wavefront-style files.
///
/// Spaces are `' '` and `'\t'`. Line terminators are `'\n'`, `'\r'`,
/// `'\0'` and form feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjClassifier;

impl Classify for ObjClassifier {
    #[inline(always)]
    fn is_space(&self, byte: u8) -> bool {
        byte == b' ' || byte == b'\t'
    }

    #[inline(always)]
    fn is_line_end(&self, byte: u8) -> bool {
        matches!(byte, b'\n' | b'\r' | b'\0' | b'\x0c')
    }

    /// `memchr3` handles three needles; form feed gets its own pass.
    #[inline]
    fn find_line_end(&self, bytes: &[u8]) -> Option<usize> {
        let common = memchr3(b'\n', b'\r', b'\0', bytes);
        let haystack = match common {
            Some(pos) => &bytes[..pos],
            None => bytes,
        };
        earliest_of(common, memchr(b'\x0c', haystack))
    }
}

fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}
