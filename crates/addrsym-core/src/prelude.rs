//! Common module for library exports

pub use crate::error::{AddressParseError, AddrsymError, AddrsymResult};
pub use crate::parser::{tokenize, FragmentParser, FrameSequence, ModuleOffsetParser, Parser, ParserKind};
pub use crate::types::{
    parse_address, Address, EmittedFrame, FrameDepth, FrameDescriptor, ModuleContext, ModuleDescriptor, ResolvedFrame,
};
