//! # objscan core
//!
//! Cursor-level scanning primitives for whitespace- and line-delimited text
//! formats such as Wavefront OBJ and MTL.
//!
//! Everything works over an already-loaded byte slice. A cursor is a byte
//! offset; each primitive takes one and returns the advanced cursor, so
//! readers compose them to walk a file line by line, field by field.
//!
//! ## Quick Start
//!
//! ```rust
//! use objscan_core::{Buffer, LineCounter};
//!
//! let buf = Buffer::new(b"usemtl brushed steel\nv 0.5 1 2\n");
//! let mut lines = LineCounter::new();
//!
//! let it = buf.next_token(0);
//! let (it, material) = buf.name(it);
//! assert_eq!(material, "brushed steel");
//!
//! let it = buf.skip_line(it, &mut lines);
//! let it = buf.next_token(it);
//! let (_, x) = buf.float(it);
//! assert_eq!(x, 0.5);
//! assert_eq!(lines.get(), 1);
//! ```
//!
//! ## Session API
//!
//! [`Lexer`] keeps the cursor and line counter for you; see its module docs.
//!
//! ## Boundary rule
//!
//! The last byte of a buffer is treated as part of the boundary and is never
//! consumed as ordinary content. Buffers are expected to end with a line
//! terminator; see [`Buffer::is_end_of_buffer`].

pub mod buffer;
pub mod classify;
pub mod config;
pub mod error;
pub mod lexer;
pub mod line;
pub mod name;
pub mod number;
pub mod token;
pub mod word;

pub use buffer::Buffer;
pub use classify::{Classify, ObjClassifier};
pub use config::ScanConfig;
pub use error::{ScanError, ScanErrorKind};
pub use lexer::{Lexer, Line};
pub use line::LineCounter;
pub use token::Token;
