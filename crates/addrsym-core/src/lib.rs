//! # addrsym-core
//!
//! Address-list parsing and stack frame emission for addrsym.
//!
//! Crash and log data sometimes arrives as nothing more than a list of
//! addresses. This crate turns such lists into stack frames annotated with
//! module-relative offsets, ready for a symbolizer:
//!
//! - [`types`]: addresses, module descriptors and frame descriptors
//! - [`parser`]: the [`Parser`] contract and its strategies
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```rust
//! use addrsym_core::prelude::*;
//!
//! let parser = FragmentParser::new("libfoo.so", "ABCD1234", 0x1000);
//! let frames = parser.parse("0x1500 garbage 0x0500").unwrap();
//!
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames.frames()[1].frame.as_placeholder(), Some("garbage"));
//! ```

pub mod error;
pub mod parser;
pub mod prelude;
pub mod types;

// Re-export commonly used types
pub use error::{AddressParseError, AddrsymError, AddrsymResult};
pub use parser::{FragmentParser, FrameSequence, ModuleOffsetParser, Parser, ParserKind};
pub use types::{Address, FrameDescriptor, ModuleDescriptor};
