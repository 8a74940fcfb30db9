//! # Module-Offset Parser
//!
//! Parses `module+offset` tokens, the form most crash logs print once the
//! runtime has already attributed an address to a loaded module:
//!
//! ```text
//! libfoo.so+0x500 libbar.so+0x1a2b ???
//! ```
//!
//! Module names are looked up among the contexts registered at construction.
//! The raw address is reconstructed as `base + offset`.

use std::sync::Arc;

use tracing::debug;

use super::sink::FrameSequence;
use super::tokenizer::tokenize;
use super::Parser;
use crate::error::AddrsymResult;
use crate::types::{parse_address, Address, FrameDepth, FrameDescriptor, ModuleContext, ModuleDescriptor, ResolvedFrame};

#[derive(Debug, Clone)]
struct RegisteredModule
{
    module: Arc<ModuleDescriptor>,
    base: Address,
}

/// Parser for `module+offset` tokens across any number of known modules.
///
/// ## Example
///
/// ```rust
/// use addrsym_core::parser::{ModuleOffsetParser, Parser};
/// use addrsym_core::types::{Address, ModuleContext, ModuleDescriptor};
///
/// let parser = ModuleOffsetParser::new([ModuleContext::new(
///     ModuleDescriptor::new("libfoo.so", "ABCD1234"),
///     Address::new(0x1000),
/// )]);
/// let frames = parser.parse("libfoo.so+0x500 libbar.so+0x10").unwrap();
/// assert_eq!(frames.resolved_count(), 1);
/// assert_eq!(frames.placeholder_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleOffsetParser
{
    modules: Vec<RegisteredModule>,
}

impl ModuleOffsetParser
{
    /// Frames from a flat token list all live at the top level.
    pub const DEPTH: FrameDepth = FrameDepth::OUTERMOST;

    /// Create a parser that knows about `contexts`.
    ///
    /// When a module name is registered twice, the first registration wins.
    pub fn new(contexts: impl IntoIterator<Item = ModuleContext>) -> Self
    {
        let mut parser = Self::default();
        for context in contexts {
            parser.register(context);
        }
        parser
    }

    /// Register one more module. Returns `false` if the name was already known.
    pub fn register(&mut self, context: ModuleContext) -> bool
    {
        if self.lookup(context.module.name()).is_some() {
            return false;
        }
        self.modules.push(RegisteredModule {
            module: Arc::new(context.module),
            base: context.base,
        });
        true
    }

    /// Number of registered modules.
    pub fn module_count(&self) -> usize
    {
        self.modules.len()
    }

    fn lookup(&self, name: &str) -> Option<&RegisteredModule>
    {
        self.modules.iter().find(|registered| registered.module.name() == name)
    }

    fn resolve(&self, token: &str) -> Option<ResolvedFrame>
    {
        // Module names may themselves contain `+` (e.g. `libstdc++.so`).
        let (name, offset) = token.rsplit_once('+')?;
        let registered = self.lookup(name)?;
        let relative = parse_address(offset).ok()?;

        Some(ResolvedFrame {
            raw: registered.base + relative.value(),
            relative,
            module: Arc::clone(&registered.module),
        })
    }

    /// Turn one token into one frame and push it into `sink`.
    ///
    /// Unknown modules, missing offsets and undecodable offsets all become
    /// placeholders carrying the token verbatim.
    pub fn process(&self, token: &str, sink: &mut FrameSequence)
    {
        let frame = match self.resolve(token) {
            Some(resolved) => FrameDescriptor::Resolved(resolved),
            None => FrameDescriptor::Placeholder(token.to_string()),
        };
        sink.emit(Self::DEPTH, frame);
    }

    /// Parse a whole input into frames. Never fails.
    pub fn parse_frames(&self, input: &str) -> FrameSequence
    {
        let mut sequence = FrameSequence::new();
        for token in tokenize(input) {
            self.process(token, &mut sequence);
        }

        debug!(
            modules = self.modules.len(),
            frames = sequence.len(),
            "parsed module-offset list"
        );
        sequence
    }
}

impl Parser for ModuleOffsetParser
{
    fn parse(&self, input: &str) -> AddrsymResult<FrameSequence>
    {
        Ok(self.parse_frames(input))
    }
}

