//! # Types
//!
//! Plain data shared by every parser: addresses, module descriptors and the
//! stack frames parsers emit.
//!
//! None of these types know how they were produced, which lets the fragment
//! parser and the module-offset parser hand back the same output.

pub mod address;
pub mod module;
pub mod stack;

// Re-export all public types
pub use address::{parse_address, Address};
pub use module::{ModuleContext, ModuleDescriptor};
pub use stack::{EmittedFrame, FrameDepth, FrameDescriptor, ResolvedFrame};
