//! Caller-owned line counting.

/// Number of line terminators crossed by [`Buffer::skip_line`].
///
/// The counter belongs to the caller and is threaded through by `&mut`.
/// Scanners only ever increment it.
///
/// [`Buffer::skip_line`]: crate::buffer::Buffer::skip_line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCounter(u32);

impl LineCounter {
    /// A counter starting at zero.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// A counter starting at `line`, e.g. to resume a numbering.
    #[inline]
    pub const fn starting_at(line: u32) -> Self {
        Self(line)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}
