//! Stack frame types.

use std::fmt;
use std::sync::Arc;

use super::{Address, ModuleDescriptor};

/// Nesting level of an emitted frame.
///
/// Parsers for flat address lists have no call structure to recover, so
/// everything they emit sits at [`FrameDepth::OUTERMOST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FrameDepth(pub u32);

impl FrameDepth
{
    /// The top-level stack.
    pub const OUTERMOST: Self = FrameDepth(0);
}

/// A frame whose address was decoded and placed inside a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFrame
{
    /// Absolute address as it appeared in the input.
    pub raw: Address,
    /// Offset from the module's load address (wraps below the base).
    pub relative: Address,
    /// Module the offset belongs to, shared by every frame of a parse.
    pub module: Arc<ModuleDescriptor>,
}

/// One entry of a parsed stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameDescriptor
{
    /// Address decoded and translated into a module-relative offset.
    Resolved(ResolvedFrame),
    /// Input text that could not be decoded, carried through verbatim.
    Placeholder(String),
}

impl FrameDescriptor
{
    /// Returns the resolved frame, if any.
    pub fn as_resolved(&self) -> Option<&ResolvedFrame>
    {
        match self {
            FrameDescriptor::Resolved(frame) => Some(frame),
            FrameDescriptor::Placeholder(_) => None,
        }
    }

    /// Returns the original token text of a placeholder, if any.
    pub fn as_placeholder(&self) -> Option<&str>
    {
        match self {
            FrameDescriptor::Resolved(_) => None,
            FrameDescriptor::Placeholder(text) => Some(text),
        }
    }

    /// `true` for placeholder frames.
    pub const fn is_placeholder(&self) -> bool
    {
        matches!(self, FrameDescriptor::Placeholder(_))
    }
}

impl fmt::Display for FrameDescriptor
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            FrameDescriptor::Resolved(frame) => {
                write!(f, "{} {}+{:#x}", frame.raw, frame.module.name(), frame.relative)
            }
            FrameDescriptor::Placeholder(text) => f.write_str(text),
        }
    }
}

/// A frame as recorded by a [`FrameSequence`](crate::parser::FrameSequence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFrame
{
    /// Nesting level the frame was emitted at.
    pub depth: FrameDepth,
    /// The frame itself.
    pub frame: FrameDescriptor,
}
