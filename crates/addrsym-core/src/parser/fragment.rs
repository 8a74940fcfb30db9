//! # Fragment Parser
//!
//! Parses a bare, whitespace-separated list of addresses that all belong to
//! one module.
//!
//! A fragment carries no module framing of its own, so the module name, build
//! identifier and load address are supplied when the parser is built. Every
//! token becomes exactly one frame:
//!
//! ```text
//! base = 0x1000, module = libfoo.so
//!
//! "0x1500 garbage 0x0500"
//!     0x1500  -> Resolved { raw: 0x1500, relative: 0x500 }
//!     garbage -> Placeholder("garbage")
//!     0x0500  -> Resolved { raw: 0x0500, relative: 0xfffffffffffff500 }
//! ```
//!
//! Addresses below the base are not rejected; their relative offset wraps.

use std::sync::Arc;

use tracing::{debug, trace};

use super::sink::FrameSequence;
use super::tokenizer::tokenize;
use super::Parser;
use crate::error::AddrsymResult;
use crate::types::{parse_address, Address, FrameDepth, FrameDescriptor, ModuleContext, ModuleDescriptor, ResolvedFrame};

/// Parser for address lists belonging to a single, caller-supplied module.
///
/// ## Example
///
/// ```rust
/// use addrsym_core::parser::{FragmentParser, Parser};
///
/// let parser = FragmentParser::new("libfoo.so", "ABCD1234", 0x1000);
/// let frames = parser.parse("0x1500 garbage").unwrap();
/// assert_eq!(frames.len(), 2);
/// assert_eq!(frames.resolved_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FragmentParser
{
    module: Arc<ModuleDescriptor>,
    base: Address,
}

impl FragmentParser
{
    /// Frames from a fragment all live at the top level.
    pub const DEPTH: FrameDepth = FrameDepth::OUTERMOST;

    /// Create a parser for `module_name`/`identifier` loaded at `base`.
    ///
    /// Name and identifier are stored verbatim.
    pub fn new(module_name: impl Into<String>, identifier: impl Into<String>, base: u64) -> Self
    {
        Self::from_context(ModuleContext::new(
            ModuleDescriptor::new(module_name, identifier),
            Address::new(base),
        ))
    }

    /// Create a parser from an existing module context.
    pub fn from_context(context: ModuleContext) -> Self
    {
        trace!(module = %context.module, base = %context.base, "creating fragment parser");
        Self {
            module: Arc::new(context.module),
            base: context.base,
        }
    }

    /// Module every resolved frame is attributed to.
    pub fn module(&self) -> &ModuleDescriptor
    {
        &self.module
    }

    /// Load address offsets are computed against.
    pub fn base(&self) -> Address
    {
        self.base
    }

    /// Turn one token into one frame and push it into `sink`.
    ///
    /// Tokens that do not decode become placeholders; this never fails.
    pub fn process(&self, token: &str, sink: &mut FrameSequence)
    {
        let frame = match parse_address(token) {
            Ok(raw) => FrameDescriptor::Resolved(ResolvedFrame {
                raw,
                relative: raw.relative_to(self.base),
                module: Arc::clone(&self.module),
            }),
            Err(_) => FrameDescriptor::Placeholder(token.to_string()),
        };
        sink.emit(Self::DEPTH, frame);
    }

    /// Parse a whole fragment into frames.
    ///
    /// Infallible counterpart of [`Parser::parse`].
    pub fn parse_frames(&self, input: &str) -> FrameSequence
    {
        let mut sequence = FrameSequence::new();
        for token in tokenize(input) {
            self.process(token, &mut sequence);
        }

        debug!(
            module = self.module.name(),
            frames = sequence.len(),
            "parsed address fragment"
        );
        sequence
    }
}

impl Parser for FragmentParser
{
    fn parse(&self, input: &str) -> AddrsymResult<FrameSequence>
    {
        Ok(self.parse_frames(input))
    }
}

